pub use plain_enum::*;
pub use derive_new::new;
pub use failure::{bail, format_err, Error};
pub use opensiedler_logging::{error, info, warn};
pub use opensiedler_util::*;
#[macro_use]
pub mod forward_to_field;
