pub use popify_utils::{ISys, RealSys};
