//! Stdout emitter - human-readable debug output.
//!
//! Prints one line per data point. Intended for development and
//! debugging, not for high-volume production use.
//!
//! # Example Output
//!
//! ```text
//! 10:30:45.123 integer   startup_ms 42 {env: prod}
//! 10:30:45.124 increment requests {env: prod}
//! 10:30:45.124 event     ready {env: prod}
//! ```

use owo_colors::{OwoColorize, Style};

use beacon_metrics::{DataPoint, EmitError, Emitter, Kind, Properties};

/// Configuration for the stdout emitter.
#[derive(Debug, Clone)]
pub struct StdoutConfig {
    /// Enable colored output.
    pub color: bool,

    /// Include the property map on every line.
    pub show_properties: bool,
}

impl Default for StdoutConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_properties: true,
        }
    }
}

impl StdoutConfig {
    /// Config with colors disabled (for piped output).
    pub fn no_color() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

/// Color styles for terminal output.
struct Styles {
    timestamp: Style,
    kind: Style,
    properties: Style,
}

impl Styles {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                timestamp: Style::new().dimmed(),
                kind: Style::new().cyan(),
                properties: Style::new().dimmed(),
            }
        } else {
            Self {
                timestamp: Style::new(),
                kind: Style::new(),
                properties: Style::new(),
            }
        }
    }
}

/// Emitter that prints data points to stdout.
pub struct StdoutEmitter {
    config: StdoutConfig,
    styles: Styles,
}

impl Default for StdoutEmitter {
    fn default() -> Self {
        Self::new(StdoutConfig::default())
    }
}

impl StdoutEmitter {
    /// Create the emitter with the given configuration.
    pub fn new(config: StdoutConfig) -> Self {
        let styles = Styles::new(config.color);
        Self { config, styles }
    }

    fn render(&self, point: &DataPoint, rendered_props: &str) -> String {
        let timestamp = point.recorded_at().format("%H:%M:%S%.3f");
        let kind = format!("{:<9}", point.kind());

        let mut line = format!(
            "{} {} {}",
            timestamp.style(self.styles.timestamp),
            kind.style(self.styles.kind),
            point.name(),
        );
        if matches!(point.kind(), Kind::String | Kind::Integer | Kind::Float) {
            line.push(' ');
            line.push_str(point.value());
        }
        if self.config.show_properties {
            line.push(' ');
            line.push_str(&format!("{}", rendered_props.style(self.styles.properties)));
        }
        line
    }
}

impl Emitter for StdoutEmitter {
    fn emit(&mut self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
        let rendered_props = render_properties(properties);
        for point in batch {
            println!("{}", self.render(point, &rendered_props));
        }
        Ok(())
    }
}

/// Property map in `{key: value; key: value}` form.
fn render_properties(properties: &Properties) -> String {
    let inner = properties
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{{{inner}}}")
}
