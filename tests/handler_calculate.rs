mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_calculate_invisible_brand() {
    let server = common::create_test_server();

    let response = server.post("/calculate").form(&common::crm_form()).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("AI Search Impact for"));
    assert!(html.contains("acme.com"));
    // queries and lost clicks
    assert!(html.contains("14,400"));
    // cost-per-click row
    assert!(html.contains("$180,000"));
    assert!(html.contains("$2.2M"));
    assert!(html.contains("$7.5M"));
    // cost-per-lead row
    assert!(html.contains("461"));
    assert!(html.contains("$82,944"));
    assert!(html.contains("$995.3K"));
    assert!(html.contains("$3.5M"));
}

#[tokio::test]
async fn test_calculate_shows_upside_and_cta() {
    let server = common::create_test_server();

    let html = server
        .post("/calculate")
        .form(&common::crm_form())
        .await
        .text();

    assert!(html.contains("5,040 clicks"));
    assert!(html.contains("161 leads"));
    assert!(html.contains("$29,030"));
    assert!(html.contains("example.test"));
    assert!(html.contains("Adjust your numbers"));
}

#[tokio::test]
async fn test_calculate_always_cited_brand() {
    let server = common::create_test_server();

    let mut form = common::crm_form();
    form.retain(|(name, _)| *name != "mention_rate");
    form.push(("mention_rate", "100"));

    let html = server.post("/calculate").form(&form).await.text();

    // 14,400 x 0.65 = 9,360 lost clicks
    assert!(html.contains("9,360"));
    assert!(html.contains("$117,000"));
    assert!(html.contains("$1.4M"));
}

#[tokio::test]
async fn test_calculate_empty_metrics_are_zero() {
    let server = common::create_test_server();

    let response = server
        .post("/calculate")
        .form(&[
            ("website", common::SITE),
            ("industry", "CRM / Sales Software"),
            ("traffic", ""),
            ("cpc", "abc"),
            ("cpl", ""),
            ("conversion", ""),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("$0"));
    assert!(!html.contains("$180,000"));
}

#[tokio::test]
async fn test_calculate_custom_industry_label() {
    let server = common::create_test_server();

    let mut form = common::crm_form();
    form.retain(|(name, _)| *name != "industry");
    form.push(("industry", "Robotics"));

    let html = server.post("/calculate").form(&form).await.text();

    assert!(html.contains("Robotics"));
    assert!(html.contains("$180,000"));
}

#[tokio::test]
async fn test_calculate_rejects_invalid_website() {
    let server = common::create_test_server();

    let mut form = common::crm_form();
    form.retain(|(name, _)| *name != "website");
    form.push(("website", ""));

    let response = server.post("/calculate").form(&form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Enter your website to continue"));
}
