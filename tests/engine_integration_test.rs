use anyhow::Result;
use coin_change::config::toml_config::TomlConfig;
use coin_change::config::DEFAULT_MAX_AMOUNT;
use coin_change::core::greedy::MAX_COINS;
use coin_change::{
    compute_change, resolve_denominations, ChangeEngine, ChangeError, ChangeRequest,
    OutputFormat, Settings,
};
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_documented_examples() -> Result<()> {
    assert_eq!(
        resolve_denominations("Custom", "5, -3, abc, 10, 10")?,
        vec![5, 10]
    );
    assert!(matches!(
        resolve_denominations("Custom", ""),
        Err(ChangeError::EmptyDenominationSet)
    ));

    let us = compute_change(87, &[1, 5, 10, 25, 50, 100])?;
    assert_eq!(us.coins(), &[50, 25, 10, 1, 1]);
    assert_eq!(us.count(), 5);

    let greedy = compute_change(6, &[1, 3, 4])?;
    assert_eq!(greedy.coins(), &[4, 1, 1]);
    assert_eq!(greedy.count(), 3);

    assert!(matches!(
        compute_change(3, &[2, 5]),
        Err(ChangeError::InexactChange { .. })
    ));
    assert!(matches!(
        compute_change(0, &[1, 5, 10]),
        Err(ChangeError::InvalidAmount { .. })
    ));
    assert!(matches!(
        compute_change(-5, &[1, 5, 10]),
        Err(ChangeError::InvalidAmount { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_engine_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("coins.toml");
    tokio::fs::write(
        &config_path,
        r#"
[defaults]
currency = "CA"
format = "csv"
delay_ms = 20

[[currency_sets]]
name = "CA"
symbol = "C$"
denominations = [5, 10, 25, 100, 200]
"#,
    )
    .await?;

    let settings = Settings::from_toml(TomlConfig::from_file(&config_path)?);
    let engine = ChangeEngine::from_config(&settings)?;

    let started = Instant::now();
    let report = engine
        .run(&ChangeRequest::new(&settings.currency, &settings.custom, "340"))
        .await?;
    assert!(started.elapsed() >= Duration::from_millis(20));

    assert_eq!(report.coins, vec![200, 100, 25, 10, 5]);
    assert_eq!(report.target_label, "C$3.40");

    let csv = report.render(settings.output()?)?;
    assert!(csv.starts_with("denomination,label,count\n200,C$2.00,1\n"));

    // no 1-cent coin in this set
    let err = engine
        .run(&ChangeRequest::new("CA", "", "341"))
        .await
        .unwrap_err();
    assert!(matches!(err, ChangeError::InexactChange { remainder: 1, .. }));
    Ok(())
}

#[tokio::test]
async fn test_each_failure_kind_is_distinct() -> Result<()> {
    let engine = ChangeEngine::default();

    let cases = [
        (ChangeRequest::new("US", "", "twelve"), "invalid_amount"),
        (ChangeRequest::new("Custom", "x, -1", "10"), "empty_set"),
        (ChangeRequest::new("Custom", "2, 5", "3"), "inexact"),
        (ChangeRequest::new("Yen", "", "10"), "unknown_set"),
    ];

    for (request, expected) in cases {
        let kind = match engine.run(&request).await {
            Err(ChangeError::InvalidAmount { .. }) => "invalid_amount",
            Err(ChangeError::EmptyDenominationSet) => "empty_set",
            Err(ChangeError::InexactChange { .. }) => "inexact",
            Err(ChangeError::UnknownCurrencySet { .. }) => "unknown_set",
            other => panic!("unexpected outcome for {:?}: {:?}", request, other),
        };
        assert_eq!(kind, expected);
    }
    Ok(())
}

#[test]
fn test_report_render_formats() -> Result<()> {
    let engine = ChangeEngine::default();
    let report = engine.calculate(&ChangeRequest::new("UK", "", "388"))?;

    let text = report.render(OutputFormat::Text)?;
    assert!(text.contains("Target Amount:          £3.88"));
    assert!(text.contains("Minimum Coins Required: 8"));

    let json: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json)?)?;
    assert_eq!(json["currency"], "UK");
    assert_eq!(json["symbol"], "£");
    assert_eq!(json["breakdown"].as_array().map(|a| a.len()), Some(8));
    Ok(())
}

#[test]
fn test_huge_amounts_return_errors() -> Result<()> {
    let engine = ChangeEngine::default();

    let err = engine
        .calculate(&ChangeRequest::new("US", "", &i64::MAX.to_string()))
        .unwrap_err();
    assert!(matches!(err, ChangeError::InvalidConfigValueError { .. }));

    let err = engine
        .calculate(&ChangeRequest::new("US", "", &(DEFAULT_MAX_AMOUNT + 1).to_string()))
        .unwrap_err();
    assert!(matches!(err, ChangeError::InvalidConfigValueError { .. }));

    let report = engine.calculate(&ChangeRequest::new("US", "", &DEFAULT_MAX_AMOUNT.to_string()))?;
    assert_eq!(report.count, 10_000);

    assert!(matches!(
        compute_change(i64::MAX, &[1, 5, 10, 25, 50, 100]),
        Err(ChangeError::ChangeTooLarge { .. })
    ));
    assert!(matches!(
        compute_change(MAX_COINS as i64 + 1, &[1]),
        Err(ChangeError::ChangeTooLarge { .. })
    ));
    // large amounts are fine when the coin count stays small
    assert_eq!(compute_change(i64::MAX, &[i64::MAX, 1])?.coins(), &[i64::MAX]);
    Ok(())
}

#[test]
fn test_lenient_number_prefixes() -> Result<()> {
    assert_eq!(resolve_denominations("Custom", "10abc, 3.5, 1")?, vec![1, 3, 10]);

    let report = ChangeEngine::default().calculate(&ChangeRequest::new("US", "", "12abc"))?;
    assert_eq!(report.target, 12);
    assert_eq!(report.coins, vec![10, 1, 1]);
    Ok(())
}
