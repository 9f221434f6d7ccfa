use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use page_actions::{Locator, PageActions, WaitPolicy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Session setup belongs to the caller; the façade only borrows the page.
    let config = BrowserConfig::builder().new_headless_mode().no_sandbox().build()?;
    let (browser, mut handler) = Browser::launch(config).await?;
    let _handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let page = browser.new_page("https://httpbin.org/forms/post").await?;
    let actions = PageActions::new(&page);

    let wait = WaitPolicy::timeout(Duration::from_secs(10));
    actions
        .clear_and_type(&Locator::name("custname"), "Page Actions", wait)
        .await?;
    actions
        .clear_and_type(&Locator::name("custtel"), "555-0100", wait)
        .await?;
    actions
        .type_text(&Locator::css("textarea[name='comments']"), "filled by demo", wait)
        .await?;
    actions
        .click(&Locator::xpath("//button[contains(., 'Submit')]"), wait)
        .await?;

    println!("Form submitted");
    Ok(())
}
