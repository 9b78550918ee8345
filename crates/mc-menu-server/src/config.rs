use mc_menu::MenuConfig;
use mc_menu_proto::types::Vec3;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub logging: LoggingSection,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub demo: DemoSection,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

/// The scripted player the demo session drives.
#[derive(Debug, Deserialize)]
pub struct DemoSection {
    #[serde(default = "default_player")]
    pub player: String,
    #[serde(default = "default_position")]
    pub position: Vec3,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
}

fn default_player() -> String {
    "Steve".into()
}

fn default_position() -> Vec3 {
    Vec3::new(0.5, 64.0, 0.5)
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            player: default_player(),
            position: default_position(),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let toml_str = r#"
            [logging]
            level = "debug"

            [menu]
            distance = 3.0
            send_close_packet = true

            [demo]
            player = "Alex"
            position = { x = 1.5, y = 70.0, z = -4.5 }
            yaw = 90.0
            pitch = 10.0
        "#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.menu.distance, 3.0);
        assert!(config.menu.send_close_packet);
        assert_eq!(config.demo.player, "Alex");
        assert_eq!(config.demo.position, Vec3::new(1.5, 70.0, -4.5));
        assert_eq!(config.demo.yaw, 90.0);
        assert_eq!(config.demo.pitch, 10.0);
    }

    #[test]
    fn parse_minimal_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            [logging]
            level = "info"
        "#,
        )
        .unwrap();
        // menu section defaults when absent
        assert_eq!(config.menu.distance, 2.0);
        assert!(!config.menu.send_close_packet);
        // demo section defaults when absent
        assert_eq!(config.demo.player, "Steve");
        assert_eq!(config.demo.position, Vec3::new(0.5, 64.0, 0.5));
        assert_eq!(config.demo.yaw, 0.0);
    }

    #[test]
    fn missing_logging_is_an_error() {
        assert!(toml::from_str::<ServerConfig>("[menu]\ndistance = 2.0\n").is_err());
    }

    #[test]
    fn shipped_config_parses() {
        let config: ServerConfig = toml::from_str(include_str!("../menu.toml")).unwrap();
        assert_eq!(config.demo.position, Vec3::new(10.5, 5.0, 12.5));
    }
}
