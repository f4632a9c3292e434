use cuenca_client::model::retry::RetryConfig;

#[test]
fn with_max_retries() {
    let config = RetryConfig::with_max_retries(5);
    assert_eq!(config.max_retries(), 5);
}

#[test]
fn with_max_retries_and_delay() {
    let config = RetryConfig::with_max_retries_and_delay(2, 7);
    assert_eq!(config.max_retries(), 2);
    assert_eq!(config.delay_secs(), 7);
}

#[test]
fn serde_round_trip() {
    let config = RetryConfig::with_max_retries_and_delay(3, 1);
    let round: RetryConfig =
        serde_json::from_value(serde_json::to_value(&config).unwrap()).unwrap();
    assert_eq!(round.max_retries(), 3);
    assert_eq!(round.delay_secs(), 1);
}
