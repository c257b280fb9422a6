mod country_rate;
mod subregion_average;
mod yearly_rate;

pub use country_rate::CountryRate;
pub use subregion_average::SubRegionAverage;
pub use yearly_rate::YearlyRate;
