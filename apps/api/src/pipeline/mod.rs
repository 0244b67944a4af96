// Document pipeline: PDF bytes -> extracted text -> normalized text.
// Everything downstream (validator, analyzer) consumes normalized text only.

pub mod extract;
pub mod normalize;
pub mod output;
