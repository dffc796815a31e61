pub mod assistance;
pub mod disease;
pub mod farm;
pub mod market;
pub mod schedule;
pub mod weather;

pub use assistance::*;
pub use disease::*;
pub use farm::*;
pub use market::*;
pub use schedule::*;
pub use weather::*;
