use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use page_actions::{Locator, PageActions, WaitPolicy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BrowserConfig::builder().new_headless_mode().no_sandbox().build()?;
    let (browser, mut handler) = Browser::launch(config).await?;
    let _handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let page = browser.new_page("https://example.com").await?;
    let actions = PageActions::new(&page);

    let heading = actions
        .wait_until_visible(&Locator::tag("h1"), WaitPolicy::default())
        .await?;
    println!("heading: {}", heading.text().await?);

    let href = actions
        .attribute(&Locator::link_text("More information..."), "href", WaitPolicy::default())
        .await?;
    println!("link: {href:?}");

    actions.refresh().await?;
    println!("refreshed ok");
    Ok(())
}
