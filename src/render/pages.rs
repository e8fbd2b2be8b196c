//! Page renderers.
//!
//! Each function maps already-derived data to the markup of one page
//! kind. Routes are fixed: home at `/`, articles under `/articles`,
//! chapter projects under `/projects`, starters under `/starters`.

use super::{document::html_escape, page, render_document};
use crate::{
    config::SiteConfig,
    content::{Article, ArticleSummary, Chapter, ChapterIndex, ProjectSummary, SiteData},
    transform,
};
use anyhow::Result;
use markdown::mdast::Node;
use std::fmt::Write;

/// Number of recent articles shown on the home page.
const HOME_ARTICLE_COUNT: usize = 5;

// ============================================================================
// Home
// ============================================================================

/// Render the home page: hero, book links, author bio, recent articles,
/// chapter projects overview.
pub fn home_page(config: &SiteConfig, data: &SiteData) -> String {
    let mut main = String::new();

    // Hero section
    writeln!(main, "<section class=\"hero\">").ok();
    writeln!(main, "<h1>{}</h1>", html_escape(&config.base.title)).ok();
    if !config.base.tagline.is_empty() {
        writeln!(main, "<p>{}</p>", html_escape(&config.base.tagline)).ok();
    }
    if !config.book.url.is_empty() {
        writeln!(
            main,
            "<a class=\"get-the-book\" href=\"{}\">Get the book</a>",
            html_escape(&config.book.url)
        )
        .ok();
    }
    if !config.book.links.is_empty() {
        writeln!(main, "<ul class=\"book-links\">").ok();
        for link in &config.book.links {
            writeln!(
                main,
                "<li><a href=\"{}\">{}</a></li>",
                html_escape(&link.url),
                html_escape(&link.label)
            )
            .ok();
        }
        writeln!(main, "</ul>").ok();
    }
    writeln!(main, "</section>").ok();

    // Recent articles
    if !data.articles.is_empty() {
        writeln!(main, "<section class=\"articles\">").ok();
        writeln!(main, "<h2>Recent Articles</h2>").ok();
        writeln!(main, "<ul>").ok();
        for article in data.articles.iter().take(HOME_ARTICLE_COUNT) {
            render_article_item(&article.summary, &mut main);
        }
        writeln!(main, "</ul>").ok();
        writeln!(main, "</section>").ok();
    }

    // Projects overview
    if !data.chapters.is_empty() {
        writeln!(main, "<section class=\"projects\">").ok();
        writeln!(main, "<h2>Chapter Projects</h2>").ok();
        writeln!(main, "<p><a href=\"/projects\">Browse all projects</a></p>").ok();
        writeln!(main, "</section>").ok();
    }

    // Author bio
    if !config.base.bio.is_empty() {
        writeln!(main, "<section class=\"author\">").ok();
        writeln!(
            main,
            "<h2>About {}</h2>",
            html_escape(&config.base.author)
        )
        .ok();
        writeln!(main, "<p>{}</p>", html_escape(&config.base.bio)).ok();
        writeln!(main, "</section>").ok();
    }

    page(config, "", &main)
}

// ============================================================================
// Articles
// ============================================================================

/// Render the articles listing page.
pub fn articles_page(config: &SiteConfig, articles: &[Article]) -> String {
    let mut main = String::new();
    writeln!(main, "<h1>Articles</h1>").ok();
    writeln!(main, "<ul class=\"article-list\">").ok();
    for article in articles {
        render_article_item(&article.summary, &mut main);
    }
    writeln!(main, "</ul>").ok();

    page(config, "Articles", &main)
}

/// Render one article detail page.
pub fn article_page(config: &SiteConfig, article: &Article) -> Result<String> {
    let summary = &article.summary;
    let body = transform::parse_document(&article.body)?;

    let mut main = String::new();
    writeln!(main, "<article>").ok();
    writeln!(main, "<h1>{}</h1>", html_escape(&summary.title)).ok();
    writeln!(
        main,
        "<p class=\"meta\"><time datetime=\"{date}\">{date}</time> · {tags}</p>",
        date = summary.date.format("%Y-%m-%d"),
        tags = html_escape(&summary.tags)
    )
    .ok();
    main.push_str(&render_document(&body));
    writeln!(main, "</article>").ok();

    Ok(page(config, &summary.title, &main))
}

fn render_article_item(summary: &ArticleSummary, out: &mut String) {
    writeln!(
        out,
        "<li><a href=\"/articles/{slug}\">{title}</a> \
         <time datetime=\"{date}\">{date}</time><p>{description}</p></li>",
        slug = html_escape(&summary.slug),
        title = html_escape(&summary.title),
        date = summary.date.format("%Y-%m-%d"),
        description = html_escape(&summary.description)
    )
    .ok();
}

// ============================================================================
// Projects
// ============================================================================

/// Render the chapter/project listing page.
pub fn projects_page(config: &SiteConfig, chapters: &ChapterIndex) -> String {
    let mut main = String::new();
    writeln!(main, "<h1>Projects</h1>").ok();
    for (id, chapter) in chapters.iter() {
        render_chapter_section(id, chapter, &mut main);
    }

    page(config, "Projects", &main)
}

fn render_chapter_section(id: &str, chapter: &Chapter, out: &mut String) {
    writeln!(out, "<section class=\"chapter\">").ok();
    writeln!(out, "<h2>{}</h2>", html_escape(&chapter.title)).ok();
    if chapter.projects.is_empty() {
        writeln!(out, "<p>No projects yet.</p>").ok();
    } else {
        writeln!(out, "<ul>").ok();
        for project in &chapter.projects {
            render_project_item(id, project, out);
        }
        writeln!(out, "</ul>").ok();
    }
    writeln!(out, "</section>").ok();
}

fn render_project_item(chapter_id: &str, project: &ProjectSummary, out: &mut String) {
    writeln!(
        out,
        "<li class=\"tier-{tier}\"><a href=\"/projects/{chapter}/{slug}\">{name}</a> \
         <span class=\"tier\">{tier}</span></li>",
        tier = project.tier,
        chapter = html_escape(chapter_id),
        slug = html_escape(&project.slug),
        name = html_escape(&project.name)
    )
    .ok();
}

/// Render one project detail page from its transformed document tree.
pub fn project_page(config: &SiteConfig, project: &ProjectSummary, tree: &Node) -> String {
    let mut main = String::new();
    writeln!(main, "<article class=\"project tier-{}\">", project.tier).ok();
    main.push_str(&render_document(tree));
    writeln!(main, "</article>").ok();

    page(config, &project.name, &main)
}

// ============================================================================
// Starters
// ============================================================================

/// Render the starter templates listing page.
pub fn starters_page(config: &SiteConfig) -> String {
    let mut main = String::new();
    writeln!(main, "<h1>Starters</h1>").ok();
    writeln!(main, "<ul class=\"starter-list\">").ok();
    for starter in &config.starters {
        writeln!(
            main,
            "<li><a href=\"{url}\">{label}</a><p>{description}</p></li>",
            url = html_escape(&starter.url),
            label = html_escape(&starter.label),
            description = html_escape(&starter.description)
        )
        .ok();
    }
    writeln!(main, "</ul>").ok();

    page(config, "Starters", &main)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Tier;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [base]
            title = "Learning Rust"
            tagline = "Companion site for the book"
            author = "Alice"
            bio = "Writes about Rust."

            [book]
            url = "https://example.com/book"

            [[starters]]
            label = "Minimal"
            url = "https://github.com/example/starter-minimal"
            description = "The smallest possible setup"
        "#,
        )
        .unwrap()
    }

    fn article(title: &str, slug: &str, date: NaiveDate) -> Article {
        Article {
            summary: ArticleSummary {
                date,
                description: format!("About {title}"),
                slug: slug.to_string(),
                tags: "testing".to_string(),
                title: title.to_string(),
            },
            body: format!("Body of *{title}*.\n"),
        }
    }

    #[test]
    fn test_home_page_hero_and_bio() {
        let data = SiteData::default();
        let html = home_page(&config(), &data);

        assert!(html.contains("<h1>Learning Rust</h1>"));
        assert!(html.contains("Companion site for the book"));
        assert!(html.contains("https://example.com/book"));
        assert!(html.contains("About Alice"));
        assert!(html.contains("Writes about Rust."));
    }

    #[test]
    fn test_home_page_lists_recent_articles_only() {
        let mut data = SiteData::default();
        for i in 0..8 {
            let date = NaiveDate::from_ymd_opt(2023, 1, (i + 1) as u32).unwrap();
            data.articles
                .push(article(&format!("Article {i}"), &format!("a{i}"), date));
        }
        let html = home_page(&config(), &data);

        let count = html.matches("/articles/a").count();
        assert_eq!(count, HOME_ARTICLE_COUNT);
    }

    #[test]
    fn test_articles_page_lists_all() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let articles = vec![article("First", "first", date), article("Second", "second", date)];
        let html = articles_page(&config(), &articles);

        assert!(html.contains("/articles/first"));
        assert!(html.contains("/articles/second"));
        assert!(html.contains("2023-06-01"));
    }

    #[test]
    fn test_article_page_renders_body() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let html = article_page(&config(), &article("First", "first", date)).unwrap();

        assert!(html.contains("<h1>First</h1>"));
        assert!(html.contains("<em>First</em>"));
        assert!(html.contains("<title>First | Learning Rust</title>"));
    }

    #[test]
    fn test_project_item_links_and_tier() {
        let project = ProjectSummary {
            tier: Tier::Starter,
            name: "Callbacks".to_string(),
            slug: "callbacks".to_string(),
            path: PathBuf::from("functions/callbacks/README.md"),
        };
        let mut out = String::new();
        render_project_item("functions", &project, &mut out);

        assert!(out.contains("/projects/functions/callbacks"));
        assert!(out.contains("Callbacks"));
        assert!(out.contains("starter"));
    }

    #[test]
    fn test_starters_page() {
        let html = starters_page(&config());

        assert!(html.contains("<h1>Starters</h1>"));
        assert!(html.contains("starter-minimal"));
        assert!(html.contains("The smallest possible setup"));
    }
}
