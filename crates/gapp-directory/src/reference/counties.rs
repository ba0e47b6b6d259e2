use serde::Serialize;

/// Service regions used to suggest nearby county pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    MetroAtlanta,
    NorthGeorgia,
    Athens,
    Augusta,
    Macon,
    Columbus,
    Southwest,
    Coastal,
    SouthCentral,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Region::MetroAtlanta => "Metro Atlanta",
            Region::NorthGeorgia => "North Georgia",
            Region::Athens => "Athens Area",
            Region::Augusta => "Augusta Area",
            Region::Macon => "Middle Georgia",
            Region::Columbus => "Columbus Area",
            Region::Southwest => "Southwest Georgia",
            Region::Coastal => "Coastal Georgia",
            Region::SouthCentral => "South Central Georgia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct County {
    pub name: &'static str,
    pub region: Option<Region>,
}

impl County {
    const fn new(name: &'static str, region: Option<Region>) -> Self {
        Self { name, region }
    }

    pub fn slug(&self) -> String {
        county_slug(self.name)
    }
}

/// URL slug for a county display name: `Ben Hill` -> `ben-hill`.
pub fn county_slug(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// All 159 Georgia counties in alphabetical order.
pub static GEORGIA_COUNTIES: [County; 159] = [
    County::new("Appling", Some(Region::SouthCentral)),
    County::new("Atkinson", Some(Region::SouthCentral)),
    County::new("Bacon", Some(Region::SouthCentral)),
    County::new("Baker", Some(Region::Southwest)),
    County::new("Baldwin", Some(Region::Macon)),
    County::new("Banks", Some(Region::Athens)),
    County::new("Barrow", Some(Region::MetroAtlanta)),
    County::new("Bartow", Some(Region::NorthGeorgia)),
    County::new("Ben Hill", None),
    County::new("Berrien", Some(Region::SouthCentral)),
    County::new("Bibb", Some(Region::Macon)),
    County::new("Bleckley", Some(Region::Macon)),
    County::new("Brantley", Some(Region::SouthCentral)),
    County::new("Brooks", Some(Region::SouthCentral)),
    County::new("Bryan", Some(Region::Coastal)),
    County::new("Bulloch", Some(Region::Coastal)),
    County::new("Burke", Some(Region::Augusta)),
    County::new("Butts", None),
    County::new("Calhoun", Some(Region::Southwest)),
    County::new("Camden", Some(Region::Coastal)),
    County::new("Candler", None),
    County::new("Carroll", None),
    County::new("Catoosa", Some(Region::NorthGeorgia)),
    County::new("Charlton", Some(Region::SouthCentral)),
    County::new("Chatham", Some(Region::Coastal)),
    County::new("Chattahoochee", Some(Region::Columbus)),
    County::new("Chattooga", Some(Region::NorthGeorgia)),
    County::new("Cherokee", Some(Region::MetroAtlanta)),
    County::new("Clarke", Some(Region::Athens)),
    County::new("Clay", None),
    County::new("Clayton", Some(Region::MetroAtlanta)),
    County::new("Clinch", Some(Region::SouthCentral)),
    County::new("Cobb", Some(Region::MetroAtlanta)),
    County::new("Coffee", Some(Region::SouthCentral)),
    County::new("Colquitt", Some(Region::Southwest)),
    County::new("Columbia", Some(Region::Augusta)),
    County::new("Cook", Some(Region::SouthCentral)),
    County::new("Coweta", Some(Region::MetroAtlanta)),
    County::new("Crawford", Some(Region::Macon)),
    County::new("Crisp", None),
    County::new("Dade", Some(Region::NorthGeorgia)),
    County::new("Dawson", Some(Region::NorthGeorgia)),
    County::new("Decatur", Some(Region::Southwest)),
    County::new("DeKalb", Some(Region::MetroAtlanta)),
    County::new("Dodge", None),
    County::new("Dooly", None),
    County::new("Dougherty", Some(Region::Southwest)),
    County::new("Douglas", Some(Region::MetroAtlanta)),
    County::new("Early", Some(Region::Southwest)),
    County::new("Echols", Some(Region::SouthCentral)),
    County::new("Effingham", Some(Region::Coastal)),
    County::new("Elbert", Some(Region::Athens)),
    County::new("Emanuel", None),
    County::new("Evans", None),
    County::new("Fannin", Some(Region::NorthGeorgia)),
    County::new("Fayette", Some(Region::MetroAtlanta)),
    County::new("Floyd", Some(Region::NorthGeorgia)),
    County::new("Forsyth", Some(Region::MetroAtlanta)),
    County::new("Franklin", Some(Region::Athens)),
    County::new("Fulton", Some(Region::MetroAtlanta)),
    County::new("Gilmer", Some(Region::NorthGeorgia)),
    County::new("Glascock", Some(Region::Augusta)),
    County::new("Glynn", Some(Region::Coastal)),
    County::new("Gordon", Some(Region::NorthGeorgia)),
    County::new("Grady", Some(Region::Southwest)),
    County::new("Greene", Some(Region::Athens)),
    County::new("Gwinnett", Some(Region::MetroAtlanta)),
    County::new("Habersham", Some(Region::NorthGeorgia)),
    County::new("Hall", Some(Region::NorthGeorgia)),
    County::new("Hancock", None),
    County::new("Haralson", None),
    County::new("Harris", Some(Region::Columbus)),
    County::new("Hart", Some(Region::Athens)),
    County::new("Heard", Some(Region::Columbus)),
    County::new("Henry", Some(Region::MetroAtlanta)),
    County::new("Houston", Some(Region::Macon)),
    County::new("Irwin", None),
    County::new("Jackson", Some(Region::Athens)),
    County::new("Jasper", Some(Region::Macon)),
    County::new("Jeff Davis", None),
    County::new("Jefferson", Some(Region::Augusta)),
    County::new("Jenkins", Some(Region::Augusta)),
    County::new("Johnson", None),
    County::new("Jones", Some(Region::Macon)),
    County::new("Lamar", None),
    County::new("Lanier", Some(Region::SouthCentral)),
    County::new("Laurens", Some(Region::Macon)),
    County::new("Lee", Some(Region::Southwest)),
    County::new("Liberty", Some(Region::Coastal)),
    County::new("Lincoln", Some(Region::Augusta)),
    County::new("Long", Some(Region::Coastal)),
    County::new("Lowndes", Some(Region::SouthCentral)),
    County::new("Lumpkin", Some(Region::NorthGeorgia)),
    County::new("Macon", None),
    County::new("Madison", Some(Region::Athens)),
    County::new("Marion", Some(Region::Columbus)),
    County::new("McDuffie", Some(Region::Augusta)),
    County::new("McIntosh", Some(Region::Coastal)),
    County::new("Meriwether", Some(Region::Columbus)),
    County::new("Miller", Some(Region::Southwest)),
    County::new("Mitchell", Some(Region::Southwest)),
    County::new("Monroe", Some(Region::Macon)),
    County::new("Montgomery", None),
    County::new("Morgan", Some(Region::Athens)),
    County::new("Murray", Some(Region::NorthGeorgia)),
    County::new("Muscogee", Some(Region::Columbus)),
    County::new("Newton", Some(Region::MetroAtlanta)),
    County::new("Oconee", Some(Region::Athens)),
    County::new("Oglethorpe", Some(Region::Athens)),
    County::new("Paulding", Some(Region::MetroAtlanta)),
    County::new("Peach", Some(Region::Macon)),
    County::new("Pickens", Some(Region::NorthGeorgia)),
    County::new("Pierce", Some(Region::SouthCentral)),
    County::new("Pike", None),
    County::new("Polk", Some(Region::NorthGeorgia)),
    County::new("Pulaski", Some(Region::Macon)),
    County::new("Putnam", Some(Region::Macon)),
    County::new("Quitman", None),
    County::new("Rabun", Some(Region::NorthGeorgia)),
    County::new("Randolph", None),
    County::new("Richmond", Some(Region::Augusta)),
    County::new("Rockdale", Some(Region::MetroAtlanta)),
    County::new("Schley", None),
    County::new("Screven", Some(Region::Augusta)),
    County::new("Seminole", Some(Region::Southwest)),
    County::new("Spalding", Some(Region::MetroAtlanta)),
    County::new("Stephens", Some(Region::NorthGeorgia)),
    County::new("Stewart", Some(Region::Columbus)),
    County::new("Sumter", Some(Region::Southwest)),
    County::new("Talbot", Some(Region::Columbus)),
    County::new("Taliaferro", None),
    County::new("Tattnall", None),
    County::new("Taylor", None),
    County::new("Telfair", None),
    County::new("Terrell", Some(Region::Southwest)),
    County::new("Thomas", Some(Region::Southwest)),
    County::new("Tift", Some(Region::Southwest)),
    County::new("Toombs", None),
    County::new("Towns", Some(Region::NorthGeorgia)),
    County::new("Treutlen", None),
    County::new("Troup", Some(Region::Columbus)),
    County::new("Turner", None),
    County::new("Twiggs", Some(Region::Macon)),
    County::new("Union", Some(Region::NorthGeorgia)),
    County::new("Upson", None),
    County::new("Walker", Some(Region::NorthGeorgia)),
    County::new("Walton", Some(Region::MetroAtlanta)),
    County::new("Ware", Some(Region::SouthCentral)),
    County::new("Warren", Some(Region::Augusta)),
    County::new("Washington", None),
    County::new("Wayne", Some(Region::Coastal)),
    County::new("Webster", None),
    County::new("Wheeler", None),
    County::new("White", Some(Region::NorthGeorgia)),
    County::new("Whitfield", Some(Region::NorthGeorgia)),
    County::new("Wilcox", None),
    County::new("Wilkes", Some(Region::Augusta)),
    County::new("Wilkinson", Some(Region::Macon)),
    County::new("Worth", Some(Region::Southwest)),
];

pub fn all_counties() -> &'static [County] {
    &GEORGIA_COUNTIES
}

pub fn find_by_slug(slug: &str) -> Option<&'static County> {
    let wanted = county_slug(slug);
    GEORGIA_COUNTIES.iter().find(|county| county.slug() == wanted)
}

pub fn find_by_name(name: &str) -> Option<&'static County> {
    let wanted = name.trim();
    GEORGIA_COUNTIES
        .iter()
        .find(|county| county.name.eq_ignore_ascii_case(wanted))
}

/// Other counties in the same region, alphabetical. Empty when the county has no region.
pub fn nearby_counties(name: &str) -> Vec<&'static County> {
    let Some(region) = find_by_name(name).and_then(|county| county.region) else {
        return Vec::new();
    };

    GEORGIA_COUNTIES
        .iter()
        .filter(|county| {
            county.region == Some(region) && !county.name.eq_ignore_ascii_case(name.trim())
        })
        .collect()
}
