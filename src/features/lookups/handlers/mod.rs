pub mod lookup_handler;

pub use lookup_handler::{
    __path_list_countries, __path_list_regions, __path_list_subregions, __path_list_years,
    list_countries, list_regions, list_subregions, list_years,
};
