//! Integration tests for the layout and classification pipeline.

use unresume::layout::{group_lines, overlay_links, LineFormatter};
use unresume::{
    Fragment, LayoutOptions, Line, LinkAnnotation, MemorySource, PageContent, PlainStyler,
    Prefetch, RenderEvent, RenderOptions, Renderer, StyleTag, Styler, Token, Unresume,
};

/// Styler that makes styling visible in plain strings.
struct Markup;

impl Styler for Markup {
    fn paint(&self, text: &str, tag: StyleTag) -> String {
        format!("<{}>{}</{}>", tag, text, tag)
    }

    fn hyperlink(&self, text: &str, url: &str) -> String {
        format!("[{}]({})", text, url)
    }
}

/// One page, one fragment per line, 20 units apart.
fn page_of(lines: &[(&str, &str)]) -> PageContent {
    lines
        .iter()
        .enumerate()
        .fold(PageContent::new(1), |page, (i, (text, font))| {
            page.with_fragment(Fragment::new(*text, 72.0, 700.0 - i as f32 * 20.0, *font))
        })
}

fn render(pages: Vec<PageContent>) -> Vec<RenderEvent> {
    let mut events: Vec<RenderEvent> = Vec::new();
    Renderer::new(RenderOptions::default(), &Markup).render_pages(&pages, &mut events);
    events
}

fn styled(text: &str, tag: StyleTag) -> RenderEvent {
    RenderEvent::Styled {
        text: text.to_string(),
        tag,
    }
}

#[test]
fn test_experience_role_title() {
    let events = render(vec![page_of(&[
        ("EXPERIENCE", "Helvetica-Bold"),
        ("Senior Engineer", "Helvetica-Bold"),
    ])]);

    assert_eq!(
        events,
        vec![
            styled("EXPERIENCE", StyleTag::Header),
            RenderEvent::Blank,
            styled("Senior Engineer", StyleTag::Header),
        ]
    );
}

#[test]
fn test_experience_plain_line_is_verbatim() {
    let events = render(vec![page_of(&[
        ("EXPERIENCE", "Helvetica-Bold"),
        ("Built a payment service in Rust", "Helvetica"),
    ])]);
    assert_eq!(
        events.last(),
        Some(&RenderEvent::Text("Built a payment service in Rust".into()))
    );
}

#[test]
fn test_skill_label_is_bolded_in_place() {
    let page = PageContent::new(1)
        .with_fragment(Fragment::new("SKILLS", 72.0, 720.0, "Helvetica-Bold"))
        .with_fragment(Fragment::new("Programming", 72.0, 700.0, "Helvetica"))
        .with_fragment(Fragment::new("Languages:", 133.0, 700.0, "Helvetica"))
        .with_fragment(Fragment::new("Go, Rust, TypeScript", 189.0, 700.0, "Helvetica"));

    let events = render(vec![page]);
    assert_eq!(
        events,
        vec![
            styled("SKILLS", StyleTag::Header),
            RenderEvent::Text("<bold>Programming Languages</bold>: Go, Rust, TypeScript".into()),
        ]
    );
}

#[test]
fn test_project_title_and_tech_stack() {
    let events = render(vec![page_of(&[
        ("PROJECTS", "Helvetica-Bold"),
        ("MY COOL PROJECT", "Helvetica-Bold"),
        ("Go, Rust", "Helvetica"),
    ])]);

    assert_eq!(
        events,
        vec![
            styled("PROJECTS", StyleTag::Header),
            RenderEvent::Blank,
            styled("MY COOL PROJECT", StyleTag::SubheaderTitle),
            styled("Go, Rust", StyleTag::MutedItalic),
        ]
    );
}

#[test]
fn test_project_body_before_next_title_gets_separator() {
    let events = render(vec![page_of(&[
        ("PROJECTS", "Helvetica-Bold"),
        ("LEDGER (2022)", "Helvetica"),
        ("Reduced sync latency by 40%.", "Helvetica"),
        ("https://github.com/jane/ledger", "Helvetica"),
        ("Wrote 3 services.", "Helvetica"),
        ("SEARCH-2 (2023)", "Helvetica"),
    ])]);

    assert_eq!(
        events,
        vec![
            styled("PROJECTS", StyleTag::Header),
            RenderEvent::Blank,
            styled("LEDGER (2022)", StyleTag::SubheaderTitle),
            RenderEvent::Text("Reduced sync latency by 40%.".into()),
            RenderEvent::Text("https://github.com/jane/ledger".into()),
            RenderEvent::Text("Wrote 3 services.".into()),
            RenderEvent::Blank,
            RenderEvent::Blank,
            styled("SEARCH-2 (2023)", StyleTag::SubheaderTitle),
        ]
    );
}

#[test]
fn test_only_first_of_adjacent_titles_is_styled() {
    let events = render(vec![page_of(&[
        ("PROJECTS", "Helvetica-Bold"),
        ("ORBIT (2021)", "Helvetica"),
        ("ORBIT-2 (2022)", "Helvetica"),
    ])]);

    let titles: Vec<&str> = events
        .iter()
        .filter(|e| e.tag() == Some(StyleTag::SubheaderTitle))
        .map(RenderEvent::text)
        .collect();
    assert_eq!(titles, vec!["ORBIT (2021)"]);
    assert_eq!(events.last(), Some(&RenderEvent::Text("ORBIT-2 (2022)".into())));
}

#[test]
fn test_education_pairs() {
    let events = render(vec![page_of(&[
        ("EDUCATION", "Helvetica-Bold"),
        ("State University", "Helvetica-Bold"),
        ("BSc Computer Science", "Helvetica"),
        ("Tech Institute", "Helvetica-Bold"),
        ("MSc Data Systems", "Helvetica"),
    ])]);

    assert_eq!(
        events,
        vec![
            styled("EDUCATION", StyleTag::Header),
            styled("<bold>State University</bold>", StyleTag::SubheaderTitle),
            styled("  BSc Computer Science", StyleTag::SubheaderMuted),
            styled("<bold>Tech Institute</bold>", StyleTag::SubheaderTitle),
            styled("  MSc Data Systems", StyleTag::SubheaderMuted),
        ]
    );
}

#[test]
fn test_education_odd_line_is_dropped() {
    let source = MemorySource::new(vec![page_of(&[
        ("EDUCATION", "Helvetica-Bold"),
        ("State University", "Helvetica"),
        ("BSc Computer Science", "Helvetica"),
        ("Exchange Semester", "Helvetica"),
        ("SKILLS", "Helvetica-Bold"),
    ])]);

    let result = Unresume::new().render_source(&source).unwrap();
    let texts: Vec<&str> = result.events.iter().map(RenderEvent::text).collect();

    assert!(!texts.iter().any(|t| t.contains("Exchange Semester")));
    assert_eq!(texts.last(), Some(&"SKILLS"));
    assert_eq!(result.stats.dropped_education_lines, 1);
}

#[test]
fn test_section_state_spans_pages() {
    let first = page_of(&[("EDUCATION", "Helvetica-Bold"), ("State University", "Helvetica")]);
    let second = page_of(&[("BSc Computer Science", "Helvetica")]);

    let events = render(vec![first, second]);
    assert_eq!(
        events,
        vec![
            styled("EDUCATION", StyleTag::Header),
            styled("State University", StyleTag::SubheaderTitle),
            styled("  BSc Computer Science", StyleTag::SubheaderMuted),
        ]
    );
}

#[test]
fn test_linked_token_is_styled_and_clickable() {
    let page = PageContent::new(1)
        .with_fragment(Fragment::new("Jane Doe", 72.0, 740.0, "Helvetica-Bold"))
        .with_fragment(Fragment::new("GitHub", 72.0, 720.0, "Helvetica"))
        .with_fragment(Fragment::new("|", 110.0, 720.0, "Helvetica"))
        .with_fragment(Fragment::new("Email", 130.0, 720.0, "Helvetica"))
        .with_link(LinkAnnotation::new([70.0, 715.0, 105.0, 730.0], "https://github.com/jane"));

    let events = render(vec![page]);
    assert_eq!(
        events,
        vec![
            RenderEvent::Text("<bold>Jane Doe</bold>".into()),
            RenderEvent::Text("[<link>GitHub</link>](https://github.com/jane) |\tEmail".into()),
        ]
    );
}

#[test]
fn test_link_overlay_bounds() {
    let link = LinkAnnotation::new([10.0, 10.0, 20.0, 20.0], "https://example.com");
    let tokens = vec![
        Token::new("inside", 15.0, 15.0, "Helvetica"),
        Token::new("corner", 10.0, 20.0, "Helvetica"),
        Token::new("outside", 20.5, 15.0, "Helvetica"),
    ];

    let linked = overlay_links(tokens, &[link]);
    assert!(linked[0].is_linked());
    assert!(linked[1].is_linked());
    assert!(!linked[2].is_linked());
}

#[test]
fn test_rows_become_lines() {
    let mut tokens = Vec::new();
    for row in 0..4 {
        let y = 700.0 - row as f32 * 12.0;
        for col in 0..3 {
            tokens.push(Token::new(format!("r{}c{}", row, col), col as f32 * 50.0, y, "Helvetica"));
        }
    }

    let lines = group_lines(tokens, LayoutOptions::default().line_threshold);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.len() == 3));
    assert_eq!(lines[2].raw_text(), "r2c0 r2c1 r2c2");
}

#[test]
fn test_formatter_is_idempotent_on_own_output() {
    let formatter = LineFormatter::new(LayoutOptions::default(), &PlainStyler);
    let line = Line::new(vec![
        Token::new("Rust", 0.0, 500.0, "Helvetica"),
        Token::new("Engineer", 26.0, 500.0, "Helvetica"),
        Token::new("2019 - 2023", 200.0, 500.0, "Helvetica"),
    ]);

    let once = formatter.format(&line);
    assert_eq!(once, "Rust Engineer\t2019 - 2023");

    let again = formatter.format(&Line::new(vec![Token::new(once.clone(), 0.0, 500.0, "Helvetica")]));
    assert_eq!(again, once);
}

#[test]
fn test_blank_fragments_are_ignored() {
    let page = PageContent::new(1)
        .with_fragment(Fragment::new("SKILLS", 72.0, 700.0, "Helvetica-Bold"))
        .with_fragment(Fragment::new("   ", 72.0, 690.0, "Helvetica"))
        .with_fragment(Fragment::new("Rust", 72.0, 680.0, "Helvetica"));

    let events = render(vec![page]);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], RenderEvent::Text("Rust".into()));
}

#[test]
fn test_prefetch_strategies_render_identically() {
    let pages: Vec<PageContent> = (0..6)
        .map(|i| {
            page_of(&[
                (if i % 2 == 0 { "PROJECTS" } else { "SKILLS" }, "Helvetica-Bold"),
                ("TOOLKIT (2020)", "Helvetica"),
                ("Tools: Git, Docker", "Helvetica"),
            ])
        })
        .collect();
    let source = MemorySource::new(pages);

    let baseline = Unresume::new().render_source(&source).unwrap();
    for prefetch in [Prefetch::Parallel, Prefetch::pipelined()] {
        let result = Unresume::new()
            .with_prefetch(prefetch)
            .render_source(&source)
            .unwrap();
        assert_eq!(result.events, baseline.events, "{:?}", prefetch);
        assert_eq!(result.stats, baseline.stats);
    }
    assert_eq!(baseline.stats.pages, 6);
    assert_eq!(baseline.stats.section_headers, 6);
}
