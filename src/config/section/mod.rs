//! Configuration section definitions.
//!
//! Each module corresponds to a section in `jwatch.toml`:
//!
//! | Module    | TOML Section | Purpose                          |
//! |-----------|--------------|----------------------------------|
//! | `display` | `[display]`  | Terminal output behaviour        |
//! | `load`    | `[load]`     | Read retry budget                |
//! | `render`  | `[render]`   | JSON indent, text encoding       |

mod display;
mod load;
mod render;

pub use display::DisplayConfig;
pub use load::LoadConfig;
pub use render::{MAX_INDENT, RenderConfig};
