mod country;
mod region;
mod subregion;

pub use country::Country;
pub use region::Region;
pub use subregion::SubRegion;
