//! Render command implementation.
//!
//! Navigates an in-memory head through the given URLs and prints the final
//! `<title>` and `<meta>` tags.

use anyhow::{Context, Result};
use headsync::config::MetaConfig;
use headsync::head::{DocumentTitle, HeadTags, MetaDefinition};
use headsync::meta::MetaService;
use headsync::{debug, log};
use serde::Serialize;

use super::RenderArgs;

#[derive(Debug, Serialize)]
struct RenderedHead<'a> {
    title: Option<&'a str>,
    tags: Vec<&'a MetaDefinition>,
}

pub fn render_head(config: &MetaConfig, args: &RenderArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start async runtime")?;

    let mut service = MetaService::in_memory(config.settings());
    let default_urls = [String::from("/")];
    let urls = if args.urls.is_empty() {
        &default_urls[..]
    } else {
        &args.urls[..]
    };

    for url in urls {
        let route = config.route_for(url);
        debug!("render"; "{} -> {}", url, if route.is_some() { "route" } else { "defaults" });

        service.update(url, route)?;
        if service.pending() > 0 {
            runtime.block_on(service.settle())?;
        }
    }

    let (_, title, tags) = service.into_parts();
    let output = if args.json {
        format_json(&title, &tags)?
    } else {
        format_html(&title, &tags)
    };
    print!("{output}");

    log!("render"; "{} tags after {} navigation(s)", tags.len(), urls.len());
    Ok(())
}

fn format_html(title: &DocumentTitle, tags: &HeadTags) -> String {
    let mut html = String::new();
    if title.get().is_some() {
        html.push_str(&title.render());
        html.push('\n');
    }
    html.push_str(&tags.render());
    html
}

fn format_json(title: &DocumentTitle, tags: &HeadTags) -> Result<String> {
    let head = RenderedHead {
        title: title.get(),
        tags: tags.iter().map(|tag| &tag.definition).collect(),
    };
    Ok(serde_json::to_string_pretty(&head)? + "\n")
}
