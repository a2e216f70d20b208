use holtwinters::{HoltWintersConfig, HoltWintersError};
use pretty_assertions::assert_eq;

#[test]
fn test_config_from_json() {
    let json = r#"{ "alpha": 0.5, "beta": 0.4, "gamma": 0.3, "season_length": 4, "horizon": 4 }"#;
    let config: HoltWintersConfig = serde_json::from_str(json).unwrap();

    let model = config.validate().unwrap();
    assert_eq!(model.season_length(), 4);

    let series = [
        3.0, 10.0, 12.0, 13.0, 12.0, 10.0, 12.0, 14.0, 16.0, 15.0, 14.0, 16.0,
    ];
    let forecast = model.forecast(&series, config.horizon().unwrap()).unwrap();
    assert_eq!(forecast.len(), 16);
}

#[test]
fn test_horizon_defaults_to_zero() {
    let json = r#"{ "alpha": 0.2, "beta": 0.1, "gamma": 0.1, "season_length": 7 }"#;
    let config: HoltWintersConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.horizon().unwrap(), 0);
}

#[test]
fn test_config_round_trip() {
    let config = HoltWintersConfig {
        season_length: 12,
        horizon: 6,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: HoltWintersConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_negative_values_rejected() {
    let json = r#"{ "alpha": 0.5, "beta": 0.4, "gamma": 0.3, "season_length": -4, "horizon": 1 }"#;
    let config: HoltWintersConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.validate().unwrap_err(),
        HoltWintersError::InvalidSeasonLength(-4)
    );

    let json = r#"{ "alpha": 0.5, "beta": 0.4, "gamma": 0.3, "season_length": 4, "horizon": -1 }"#;
    let config: HoltWintersConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.validate().unwrap_err(),
        HoltWintersError::InvalidHorizon(-1)
    );
}

#[test]
fn test_coefficients_not_range_checked() {
    let config = HoltWintersConfig {
        alpha: 1.5,
        beta: -0.5,
        gamma: 2.0,
        ..Default::default()
    };
    let model = config.validate().unwrap();
    assert_eq!(model.alpha(), 1.5);
}
