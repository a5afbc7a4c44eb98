pub mod lookup;
pub mod nominatim;
pub mod resolver;

pub use lookup::{LookupError, ReverseGeocoder};
pub use nominatim::NominatimGeocoder;
pub use resolver::{CityLookup, CityResolver, RetryPolicy, Sleeper, ThreadSleeper};
