//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the geocode → conditions → forecast pipeline for a place.
    /// `generation` is echoed back on the result action.
    LookupWeather { place: String, generation: u64 },
}
