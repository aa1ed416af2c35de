use apiref_extract::{parse_class, Error, Page};

/// A class page with every section kind populated, including an experimental
/// entry and a duplicated example.
const CLASS_PAGE: &str = r#"
<html><body>
<div class="content">
    <h1>Entity</h1>
    <p>Represents the state of an entity in the world.</p>

    <div class="heading-wrapper" data-heading-level="h2"><h2>Extends</h2></div>
    <ul><li>Actor</li><li>GameObject</li></ul>

    <div class="heading-wrapper" data-heading-level="h2"><h2>Properties</h2></div>
    <div class="heading-wrapper" data-heading-level="h3"><h3>nameTag</h3></div>
    <p>Name shown above the entity.</p>
    <div class="alert is-warning">Server side only.</div>

    <div class="heading-wrapper" data-heading-level="h2"><h2>Methods</h2></div>
    <div class="heading-wrapper" data-heading-level="h3"><h3>applyDamage</h3></div>
    <p>Applies damage to the entity.</p>
    <div class="heading-wrapper" data-heading-level="h4"><h4>Parameters</h4></div>
    <ul>
        <li><p>amount</p><p>how much damage</p></li>
        <li>options?: DamageOptions</li>
    </ul>
    <div class="heading-wrapper" data-heading-level="h4"><h4>Returns boolean</h4></div>
    <div class="heading-wrapper" data-heading-level="h4"><h4>Examples</h4></div>
    <div class="heading-wrapper" data-heading-level="h5"><h5>damage.ts</h5></div>
    <pre>entity.applyDamage(5);</pre>
    <div data-moniker="server-experimental">
        <div class="heading-wrapper" data-heading-level="h3"><h3>teleportFacing</h3></div>
        <p>Teleports and turns the entity.</p>
    </div>

    <div class="heading-wrapper" data-heading-level="h2"><h2>Constants</h2></div>
    <div class="heading-wrapper" data-heading-level="h3"><h3>MAX_EFFECTS</h3></div>
    <p>Upper bound on concurrent effects.</p>

    <div class="heading-wrapper" data-heading-level="h4"><h4>Examples</h4></div>
    <div class="heading-wrapper" data-heading-level="h5"><h5>damage.ts</h5></div>
    <pre>entity.applyDamage(5);</pre>
</div>
</body></html>
"#;

#[test]
fn class_page_combines_every_section() {
    let page = Page::parse(CLASS_PAGE);
    let doc = match parse_class(&page) {
        Ok(doc) => doc,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(doc.name, "Entity");
    assert_eq!(
        doc.description,
        "Represents the state of an entity in the world. Extends: Actor, GameObject."
    );

    assert_eq!(doc.properties.len(), 1);
    assert_eq!(
        doc.properties[0].description,
        "Name shown above the entity.\nServer side only."
    );

    assert_eq!(doc.constants.len(), 1);
    assert_eq!(doc.constants[0].name, "MAX_EFFECTS");
}

#[test]
fn class_methods_include_experimental_entries() {
    let page = Page::parse(CLASS_PAGE);
    let doc = parse_class(&page).expect("class page should parse");

    let names: Vec<&str> = doc.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["applyDamage", "teleportFacing"]);
}

#[test]
fn class_method_accumulates_description_and_parameters() {
    let page = Page::parse(CLASS_PAGE);
    let doc = parse_class(&page).expect("class page should parse");

    let method = &doc.methods[0];
    assert!(method.description.starts_with("Applies damage to the entity."));
    assert!(method.description.contains("Returns boolean"));

    assert_eq!(method.parameters.len(), 2);
    assert_eq!(method.parameters[0].name, "amount");
    assert_eq!(method.parameters[0].description, "how much damage");
    assert_eq!(method.parameters[1].name, "options?: DamageOptions");
    assert_eq!(method.parameters[1].description, "");
}

#[test]
fn duplicated_examples_collapse_to_one() {
    let page = Page::parse(CLASS_PAGE);
    let doc = parse_class(&page).expect("class page should parse");

    assert_eq!(doc.examples.len(), 1);
    assert_eq!(doc.examples[0].code_name, "damage.ts");
    assert_eq!(doc.examples[0].code, "entity.applyDamage(5);");
}

#[test]
fn visible_danger_callout_forms_the_description() {
    let html = r#"
    <div class="content">
        <h1>Deprecated</h1>
        <div class="alert is-danger" hidden>Wrong flavor note.</div>
        <div class="alert is-danger">This class is deprecated. </div>
        <p>Use the replacement module.</p>
        <p>Old lead paragraph.</p>
    </div>
    "#;

    let page = Page::parse(html);
    let doc = parse_class(&page).expect("class page should parse");

    assert_eq!(
        doc.description,
        "This class is deprecated.Use the replacement module."
    );
}

#[test]
fn class_page_without_title_propagates_the_failure() {
    let page = Page::parse(r#"<div class="content"><p>Lead.</p></div>"#);

    match parse_class(&page) {
        Err(Error::MissingNode(_)) => {}
        other => panic!("expected Err(MissingNode), got {other:?}"),
    }
}
