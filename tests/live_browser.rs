//! End-to-end scenarios against a real browser. Ignored by default since
//! they need a chromium/chrome binary on `PATH` (or `CDPILOT_CHROME`
//! pointing at one); run with `cargo test -- --ignored`.

use cdpilot::{By, CdpError};

async fn launch_headless() -> cdpilot::ContextManager {
    let config = cdpilot::BrowserConfig::builder().headless(true).build();
    cdpilot::launch(config).await.expect("browser launch")
}

#[ignore]
#[tokio::test]
async fn launches_and_reaches_about_blank() {
    let manager = launch_headless().await;
    let context = manager.get_context(None);
    let tab = context.new_tab("about:blank").await.unwrap();

    assert_eq!(tab.current_url().await.unwrap(), "about:blank");
    assert_eq!(tab.title().await.unwrap(), "");

    let ready_state = tab.execute_script("document.readyState").await.unwrap();
    match ready_state {
        cdpilot::RuntimeValue::Scalar(serde_json::Value::String(s)) => assert_eq!(s, "complete"),
        other => panic!("unexpected readyState result: {other:?}"),
    }

    manager.close().await.unwrap();
}

#[ignore]
#[tokio::test]
async fn finds_elements_by_every_locator_strategy() {
    let manager = launch_headless().await;
    let context = manager.get_context(None);
    let tab = context.new_tab("about:blank").await.unwrap();

    tab.execute_script(
        r#"document.body.innerHTML = '<div id="x" class="c"><span>hi</span></div>';"#,
    )
    .await
    .unwrap();

    let by_id = tab.find_element(By::id("x")).await.unwrap();
    assert_eq!(by_id.text().await.unwrap(), "hi");

    let by_css = tab.find_element(By::selector(".c span")).await.unwrap();
    assert_eq!(by_css.tag().await.unwrap(), "span");

    let by_xpath = tab.find_element(By::xpath("//div[@id='x']/span")).await.unwrap();
    assert_eq!(by_xpath.outer_html().await.unwrap(), "<span>hi</span>");

    let missing = tab.find_elements(By::xpath("//missing")).await.unwrap();
    assert!(missing.is_empty());

    let err = tab.find_element(By::xpath("//missing")).await.unwrap_err();
    assert!(matches!(err, CdpError::NoSuchElement));

    manager.close().await.unwrap();
}

#[ignore]
#[tokio::test]
async fn rejects_file_upload_on_non_file_input() {
    let manager = launch_headless().await;
    let context = manager.get_context(None);
    let tab = context.new_tab("about:blank").await.unwrap();

    tab.execute_script(
        r#"document.body.innerHTML = '<input type="text" id="t"><input type="file" id="f">';"#,
    )
    .await
    .unwrap();

    let text_input = tab.find_element(By::id("t")).await.unwrap();
    let err = text_input.set_input_files(vec!["/tmp/x.txt".into()]).await.unwrap_err();
    assert!(matches!(err, CdpError::ElementNotFileInput));

    manager.close().await.unwrap();
}

#[ignore]
#[tokio::test]
async fn cookies_round_trip_through_the_context() {
    let manager = launch_headless().await;
    let context = manager.get_context(None);
    let tab = context.new_tab("https://example.com").await.unwrap();
    let _ = tab;

    let cookie = cdpilot_cdp::browser_protocol::network::CookieParam {
        name: "a".into(),
        value: "1".into(),
        domain: Some("example.com".into()),
        path: Some("/".into()),
        ..Default::default()
    };
    context.set_cookies(vec![cookie]).await.unwrap();

    let cookies = context.get_cookies().await.unwrap();
    assert!(cookies.iter().any(|c| c.name == "a" && c.value == "1"));

    context.delete_all_cookies().await.unwrap();
    manager.close().await.unwrap();
}

#[ignore]
#[tokio::test]
async fn new_context_is_isolated_and_disposable() {
    let manager = launch_headless().await;
    let fresh = manager.new_context().await.unwrap();
    let tab = fresh.new_tab("about:blank").await.unwrap();
    assert_eq!(tab.current_url().await.unwrap(), "about:blank");

    manager.delete_context(&fresh).await.unwrap();
    manager.close().await.unwrap();
}
