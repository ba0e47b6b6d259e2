mod common;
mod results;
