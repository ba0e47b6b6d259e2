use crate::infra::directory_service;
use clap::Args;
use gapp_directory::config::AppConfig;
use gapp_directory::directory::{
    DirectoryFilters, DirectoryPage, DirectoryQuery, DirectorySort, ServiceFilter,
};
use gapp_directory::error::AppError;
use gapp_directory::screener::{
    HoursStatus, IndicatorCategory, MedicaidStatus, PainPoint, ScreenerEngine, ScreenerResult,
    ScreenerState, ScreenerStep,
};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DirectorySearchArgs {
    /// Only show agencies serving this county
    #[arg(long)]
    pub(crate) county: Option<String>,
    /// Service filter: all, RN, LPN, or PCS
    #[arg(long, default_value = "all")]
    pub(crate) service: ServiceFilter,
    /// Match agency name or city
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Ordering: recommended, name, or tier
    #[arg(long, value_parser = parse_choice::<DirectorySort>, default_value = "recommended")]
    pub(crate) sort: DirectorySort,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Override the configured page size
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
    /// Provider seed CSV (defaults to DIRECTORY_SEED_CSV)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScreenerArgs {
    /// County the family lives in
    #[arg(long)]
    pub(crate) county: String,
    /// Medicaid status: active, pending, none, or unsure
    #[arg(long, value_parser = parse_choice::<MedicaidStatus>)]
    pub(crate) medicaid: MedicaidStatus,
    /// GAPP hours: approved, not_approved, unsure, or reduced
    #[arg(long, value_parser = parse_choice::<HoursStatus>)]
    pub(crate) hours: HoursStatus,
    /// Biggest obstacle right now, e.g. finding_agency or staffing_gaps
    #[arg(long, value_parser = parse_choice::<PainPoint>)]
    pub(crate) pain_point: PainPoint,
    /// Care need as category:id, e.g. airway:trach (repeatable)
    #[arg(long = "indicator", value_parser = parse_indicator)]
    pub(crate) indicators: Vec<(IndicatorCategory, String)>,
    /// Optional ZIP code
    #[arg(long)]
    pub(crate) zip: Option<String>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_directory_search(args: DirectorySearchArgs) -> Result<(), AppError> {
    let mut directory_config = AppConfig::load()?.directory;
    if let Some(csv) = args.csv {
        directory_config.seed_csv = Some(csv);
    }

    let page_size = args
        .page_size
        .unwrap_or(directory_config.page_size)
        .max(1);
    let service = directory_service(&directory_config)?;

    let mut query = DirectoryQuery::new(
        DirectoryFilters {
            county: args.county,
            service: args.service,
            search_text: args.search,
        },
        args.page.max(1),
        page_size,
    );
    query.sort = args.sort;

    let page = service.search(&query)?;
    render_directory_page(&page);
    Ok(())
}

fn render_directory_page(page: &DirectoryPage) {
    println!(
        "GAPP provider directory: {} match(es), page {} of {}",
        page.total_count,
        page.page,
        page.total_pages.max(1)
    );
    if page.items.is_empty() {
        println!("- No providers on this page");
        return;
    }

    for card in &page.items {
        let services: Vec<&str> = card.services.iter().map(|badge| badge.code).collect();
        println!(
            "- {} ({}) | {} | score {} | {}",
            card.name,
            card.city,
            services.join("/"),
            card.score,
            card.lifecycle.label()
        );
        let hidden = if card.hidden_county_count > 0 {
            format!(" (+{} more)", card.hidden_county_count)
        } else {
            String::new()
        };
        println!("  Counties: {}{}", card.counties.join(", "), hidden);
        if card.accepting_new_patients {
            println!("  Accepting new patients");
        }
        if let Some(phone) = &card.phone {
            println!("  Phone: {phone}");
        }
    }
}

pub(crate) fn run_screener_evaluate(args: ScreenerArgs) -> Result<(), AppError> {
    let ScreenerArgs {
        county,
        medicaid,
        hours,
        pain_point,
        indicators,
        zip,
        json,
    } = args;

    let mut state = ScreenerState {
        step: ScreenerStep::Results,
        medicaid_status: Some(medicaid),
        hours_status: Some(hours),
        pain_point: Some(pain_point),
        county,
        zip_code: zip,
        ..ScreenerState::default()
    };
    for (category, id) in indicators {
        state.indicators_mut(category).insert(id);
    }

    let result = ScreenerEngine::standard().evaluate(&state);
    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Result payload unavailable: {err}"),
        }
    } else {
        render_screener_result(&result);
    }
    Ok(())
}

fn render_screener_result(result: &ScreenerResult) {
    println!("{}", result.fit_content.title);
    println!("Fit level: {}", result.fit_level.label());
    println!("{}", result.fit_content.snapshot);

    println!("\nNext steps");
    for step in &result.next_steps {
        println!("{}. {}", step.step, step.title);
        println!("   {}", step.description);
    }

    println!("\nWhat to say when you call an agency");
    println!("  {}", result.scripts.agency);
    println!("\nWhat to ask your pediatrician");
    println!("  {}", result.scripts.pediatrician);
    if let Some(coordinator) = &result.scripts.coordinator {
        println!("\nWhat to ask your care coordinator");
        println!("  {coordinator}");
    }
}

/// Parse a snake_case choice through the type's serde names.
fn parse_choice<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_ascii_lowercase()))
        .map_err(|_| format!("'{raw}' is not a recognised option"))
}

fn parse_indicator(raw: &str) -> Result<(IndicatorCategory, String), String> {
    let (category, id) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected category:id, got '{raw}'"))?;
    let category = parse_choice::<IndicatorCategory>(category)?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("indicator id missing in '{raw}'"));
    }
    Ok((category, id.to_string()))
}
