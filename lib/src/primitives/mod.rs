pub mod building;
pub mod devcard;
pub mod resource;
pub use self::{building::*, devcard::*, resource::*};
