pub mod report_handler;

pub use report_handler::{
    __path_country_history, __path_region_averages, __path_search_countries,
    __path_subregion_snapshot, __path_top_mortality, country_history, region_averages,
    search_countries, subregion_snapshot, top_mortality,
};
