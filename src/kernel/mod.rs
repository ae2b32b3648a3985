mod architecture;
mod release;

pub use architecture::Architecture;
pub use release::{KernelRelease, ReleaseError};
