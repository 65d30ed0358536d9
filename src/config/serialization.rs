//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{orientation_str, Config};

impl Config {
    /// Serialize to a commented TOML template
    ///
    /// Used by `ensure_config_exists`, `config --reset` and `config --show`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# tyrannus configuration
#
# Units below are terminal cells.

# Frames rendered per second
fps = {fps}

# Default panel styling
[panel]
padding = {padding}
draw_header = {draw_header}
draw_border = {draw_border}

# Tab nav bar: orientation is "row" or "column"
[nav]
orientation = "{orientation}"
height = {nav_height}
item_padding = {item_padding}
item_spacing = {item_spacing}

# Scrollbar geometry; wheel_speed is cells per wheel notch
[scroll]
scrollbar_width = {scrollbar_width}
scrollbar_padding = {scrollbar_padding}
min_thumb = {min_thumb}
wheel_speed = {wheel_speed:?}

# Progress bars ease toward their target when smooth_animation is on
[progress]
smooth_animation = {smooth}

# Logging: level is trace, debug, info, warn or error
# RUST_LOG overrides level when set
[logging]
level = "{level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"  # hourly, daily, never
file_prefix = "{file_prefix}"
"#,
            fps = self.fps,
            padding = self.panel.padding,
            draw_header = self.panel.draw_header,
            draw_border = self.panel.draw_border,
            orientation = orientation_str(self.nav.orientation),
            nav_height = self.nav.height,
            item_padding = self.nav.item_padding,
            item_spacing = self.nav.item_spacing,
            scrollbar_width = self.scroll.scrollbar_width,
            scrollbar_padding = self.scroll.scrollbar_padding,
            min_thumb = self.scroll.min_thumb,
            wheel_speed = self.scroll.wheel_speed,
            smooth = self.progress.smooth_animation,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = toml_path(&self.logging.file_dir),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}

/// Path as a TOML basic string body (backslashes escaped for Windows paths)
fn toml_path(path: &std::path::Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
