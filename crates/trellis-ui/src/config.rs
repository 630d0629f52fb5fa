use serde::Deserialize;

const PLANNER_CONFIG_TOML: &str =
  include_str!(
    "../assets/planner.toml"
  );

#[derive(
  Clone, Debug, PartialEq, Deserialize,
)]
pub struct PlannerConfig {
  #[serde(default)]
  pub version:  u32,
  #[serde(default)]
  pub policies: PlannerPolicies
}

#[derive(
  Clone, Debug, PartialEq, Deserialize,
)]
pub struct PlannerPolicies {
  #[serde(
    default = "default_time_windows"
  )]
  pub time_windows_weeks: Vec<u32>,
  #[serde(
    default = "default_bar_limit"
  )]
  pub bar_limit:          usize
}

fn default_time_windows() -> Vec<u32> {
  vec![1, 2, 3]
}

fn default_bar_limit() -> usize {
  200
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      version:  1,
      policies:
        PlannerPolicies::default()
    }
  }
}

impl Default for PlannerPolicies {
  fn default() -> Self {
    Self {
      time_windows_weeks:
        default_time_windows(),
      bar_limit: default_bar_limit()
    }
  }
}

pub fn load_planner_config()
-> PlannerConfig {
  match toml::from_str::<PlannerConfig>(
    PLANNER_CONFIG_TOML
  ) {
    | Ok(mut config) => {
      sanitize_planner_config(
        &mut config
      );
      tracing::info!(
        version = config.version,
        windows = ?config.policies.time_windows_weeks,
        "loaded planner config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing planner config; using defaults");
      PlannerConfig::default()
    }
  }
}

fn sanitize_planner_config(
  config: &mut PlannerConfig
) {
  config
    .policies
    .time_windows_weeks
    .retain(|weeks| *weeks > 0);
  if config
    .policies
    .time_windows_weeks
    .is_empty()
  {
    config.policies.time_windows_weeks =
      default_time_windows();
  }

  if config.policies.bar_limit == 0 {
    config.policies.bar_limit =
      default_bar_limit();
  }
}
