use apiref_extract::{parse_enum, parse_interface, Error, Page};

#[test]
fn enum_page_scenario() {
    let html = r#"
    <div class="content">
        <h1>WeatherType</h1>
        <p>Does a thing.</p>
        <div class="heading-wrapper" data-heading-level="h2"><h2>Constants</h2></div>
        <div class="heading-wrapper" data-heading-level="h3"><h3>FOO</h3></div>
        <p>The foo constant.</p>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = match parse_enum(&page) {
        Ok(doc) => doc,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(doc.name, "WeatherType");
    assert_eq!(doc.description, "Does a thing.");
    assert_eq!(doc.constants.len(), 1);
    assert_eq!(doc.constants[0].name, "FOO");
    assert_eq!(doc.constants[0].description, "The foo constant.");
}

#[test]
fn enum_description_is_trimmed() {
    let html = r#"
    <div class="content">
        <h1>Season</h1>
        <p>
            Named seasons.
        </p>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = parse_enum(&page).expect("enum page should parse");

    assert_eq!(doc.description, "Named seasons.");
}

#[test]
fn enum_without_constants_section_has_empty_constants() {
    let html = r#"
    <div class="content">
        <h1>Season</h1>
        <p>Named seasons.</p>
        <div class="heading-wrapper" data-heading-level="h2"><h2>Remarks</h2></div>
        <p>No constants here.</p>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = parse_enum(&page).expect("enum page should parse");

    assert!(doc.constants.is_empty());
}

#[test]
fn enum_without_lead_paragraph_fails() {
    let page = Page::parse(r#"<div class="content"><h1>Bare</h1></div>"#);

    match parse_enum(&page) {
        Err(Error::MissingNode(_)) => {}
        other => panic!("expected Err(MissingNode), got {other:?}"),
    }
}

#[test]
fn interface_page_with_properties_and_examples() {
    let html = r#"
    <div class="content">
        <h1>ExplosionOptions</h1>
        <p>Optional settings for an explosion.</p>
        <div class="heading-wrapper" data-heading-level="h2"><h2>Properties</h2></div>
        <div class="heading-wrapper" data-heading-level="h3"><h3>breaksBlocks</h3></div>
        <p>Whether blocks break.</p>
        <div class="heading-wrapper" data-heading-level="h3"><h3>causesFire</h3></div>
        <p>Whether fire spreads.</p>
        <div class="heading-wrapper" data-heading-level="h4"><h4>Examples</h4></div>
        <div class="heading-wrapper" data-heading-level="h5"><h5>boom.ts</h5></div>
        <pre>world.createExplosion(loc, 5, options);</pre>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = match parse_interface(&page) {
        Ok(doc) => doc,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(doc.name, "ExplosionOptions");
    assert_eq!(doc.description, "Optional settings for an explosion.");

    let names: Vec<&str> = doc.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["breaksBlocks", "causesFire"]);

    assert_eq!(doc.examples.len(), 1);
    assert_eq!(doc.examples[0].code_name, "boom.ts");
}

#[test]
fn interface_properties_section_matched_by_substring() {
    let html = r#"
    <div class="content">
        <h1>Options</h1>
        <p>Lead.</p>
        <div class="heading-wrapper" data-heading-level="h2"><h2>Optional Properties</h2></div>
        <div class="heading-wrapper" data-heading-level="h3"><h3>flag</h3></div>
        <p>A flag.</p>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = parse_interface(&page).expect("interface page should parse");

    assert_eq!(doc.properties.len(), 1);
}

#[test]
fn later_matching_section_overwrites_earlier_one() {
    // Two sections match "Constants"; the enum assembler keeps the later one.
    let html = r#"
    <div class="content">
        <h1>Overlap</h1>
        <p>Lead.</p>
        <div class="heading-wrapper" data-heading-level="h2"><h2>Constants</h2></div>
        <div class="heading-wrapper" data-heading-level="h3"><h3>EARLY</h3></div>
        <p>First section.</p>
        <div class="heading-wrapper" data-heading-level="h2"><h2>Deprecated Constants</h2></div>
        <div class="heading-wrapper" data-heading-level="h3"><h3>LATE</h3></div>
        <p>Second section.</p>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = parse_enum(&page).expect("enum page should parse");

    assert_eq!(doc.constants.len(), 1);
    assert_eq!(doc.constants[0].name, "LATE");
}
