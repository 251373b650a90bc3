pub mod results;
pub mod series;

pub use results::*;
pub use series::*;
