use super::*;
use crate::attributes;

fn paragraph() -> Element {
    let mut p = Element::new("p").unwrap();
    p.set_text("another test");
    p
}

fn icon() -> Element {
    Element::builder("img")
        .void(true)
        .attrs(attributes! { src => "/icon.png" })
        .build()
        .unwrap()
}

fn lead_div() -> Element {
    Element::builder("div")
        .class(["container", "container-fluid"])
        .attrs(attributes! { id => "lead" })
        .build()
        .unwrap()
        .with_child(paragraph())
        .with_child(icon())
}

#[test]
fn test_text_element() {
    assert_eq!(paragraph().to_string(), "<p >another test</p>");

    let h1 = Element::builder("h1")
        .class(["main-text"])
        .text("Test")
        .build()
        .unwrap();
    assert_eq!(h1.to_string(), r#"<h1 class="main-text">Test</h1>"#);

    assert_eq!(Element::new("span").unwrap().to_string(), "<span ></span>");
}

#[test]
fn test_void_element() {
    assert_eq!(icon().to_string(), r#"<img src="/icon.png"/>"#);
    let br = Element::builder("br").void(true).build().unwrap();
    assert_eq!(br.to_string(), "<br />");
}

#[test]
fn test_void_with_children() {
    let mut el = Element::builder("img").void(true).text("t").build().unwrap();
    el.add(Element::new("b").unwrap());
    assert_eq!(el.to_string(), "<img >t<b ></b></img>");
}

#[test]
fn test_text_before_children() {
    let mut el = Element::new("li").unwrap();
    el.set_text("first ");
    el.add(Element::builder("em").text("second").build().unwrap())
        .add(Element::builder("em").text("third").build().unwrap());
    assert_eq!(el.to_string(), "<li >first <em >second</em><em >third</em></li>");
}

#[test]
fn test_nested_element() {
    assert_eq!(
        lead_div().to_string(),
        r#"<div class="container container-fluid" id="lead"><p >another test</p><img src="/icon.png"/></div>"#
    );
}

#[test]
fn test_attribute_order() {
    let el = Element::builder("a")
        .attr("title", "t")
        .attr("href", "/")
        .attrs(attributes! { rel => "next" })
        .build()
        .unwrap();
    assert_eq!(el.to_string(), r#"<a title="t" href="/" rel="next"></a>"#);

    let div = lead_div();
    assert_eq!(div.to_string(), div.to_string());
}

#[test]
fn test_class_join() {
    let div = lead_div();
    assert_eq!(
        div.attribute("class"),
        Some(&"container container-fluid".to_string())
    );

    let empty = Element::builder("div")
        .class(Vec::<String>::new())
        .build()
        .unwrap();
    assert!(empty.attributes().is_empty());
}

#[test]
fn test_key_normalization() {
    let el = Element::builder("meta")
        .void(true)
        .attrs(attributes! { http_equiv => "refresh", r#type => "text" })
        .attr("data_id", "x")
        .build()
        .unwrap();
    assert_eq!(
        el.to_string(),
        r#"<meta http-equiv="refresh" type="text" data-id="x"/>"#
    );

    let mut el = Element::new("div").unwrap();
    el.set_attribute("aria_label", "menu");
    assert_eq!(el.attribute("aria-label"), Some(&"menu".to_string()));
}

#[test]
fn test_last_write_wins() {
    let el = Element::builder("div")
        .attr("data_id", "1")
        .attr("id", "x")
        .attr("data-id", "2")
        .build()
        .unwrap();
    assert_eq!(el.to_string(), r#"<div data-id="2" id="x"></div>"#);
}

#[test]
fn test_invalid_tag_name() {
    for name in ["", " ", "my tag", "<p", "p>", "br/"] {
        assert!(
            matches!(Element::new(name), Err(MarkupError::InvalidArgument(_))),
            "{:?} should be rejected",
            name
        );
    }
    assert!(Element::top_level("").is_err());
}

fn document() -> Element {
    let mut head = Element::top_level("head").unwrap();
    head.add(Element::builder("title").text("hello").build().unwrap());

    let mut body = Element::top_level("body").unwrap();
    body.add(
        Element::builder("h1")
            .class(["main-text"])
            .text("Test")
            .build()
            .unwrap(),
    )
    .add(lead_div());

    let mut html = Element::builder("html")
        .top_level(true)
        .attrs(attributes! { lang => "en" })
        .build()
        .unwrap();
    html.add(head).add(body);
    html
}

#[test]
fn test_write_document() {
    let mut out = Vec::new();
    document().write_document(&mut out).unwrap();
    let target = r#"<html>
<head ><title >hello</title></head>
<body ><h1 class="main-text">Test</h1><div class="container container-fluid" id="lead"><p >another test</p><img src="/icon.png"/></div></body>
</html>
"#;
    assert_eq!(String::from_utf8(out).unwrap(), target);
}

#[test]
fn test_write_document_wrapper() {
    let mut section = Element::builder("section")
        .attrs(attributes! { id => "main" })
        .build()
        .unwrap();
    section.add(paragraph());
    let mut out = Vec::new();
    section.write_document(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "<section id=\"main\">\n<p >another test</p>\n</section>\n"
    );

    section.set_top_level(true);
    let mut out = Vec::new();
    section.write_document(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "<section>\n<p >another test</p>\n</section>\n"
    );
}

#[test]
fn test_write_document_without_children() {
    let mut out = Vec::new();
    Element::top_level("html")
        .unwrap()
        .write_document(&mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "<html>\n</html>\n");
}

#[test]
fn test_builder_children() {
    let ul = Element::builder("ul")
        .child(Element::builder("li").text("one").build().unwrap())
        .child(Element::builder("li").text("two").build().unwrap())
        .build()
        .unwrap();
    assert_eq!(ul.children().len(), 2);
    assert_eq!(ul.children()[1].text(), "two");
    assert_eq!(ul.to_string(), "<ul ><li >one</li><li >two</li></ul>");
}
