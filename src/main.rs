use tagtree::{attributes, Element, MarkupError};
use tracing::{info, span, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct Args {
    pub root: String,
    pub trace: bool,
}

fn main() {
    let args = parse_args().expect("Could not parse arguments");
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::DEBUG)
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish()
            .init();
        info!("Logger initialized");
    }

    let page = build_page(&args.root).expect("Could not build page");
    page.emit().expect("Could not write to stdout");
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let trace = pargs.contains(["--trace", "-t"]);
    let args = Args {
        root: pargs
            .opt_free_from_str()?
            .unwrap_or_else(|| "html".to_string()),
        trace,
    };
    Ok(args)
}

/// A small sample page with a head and a body
fn build_page(root: &str) -> Result<Element, MarkupError> {
    let span = span!(Level::DEBUG, "Building page");
    let _enter = span.enter();

    let mut head = Element::top_level("head")?;
    head.add(Element::builder("title").text("hello").build()?);

    let mut body = Element::top_level("body")?;
    body.add(
        Element::builder("h1")
            .class(["main-text"])
            .text("Test")
            .build()?,
    );

    let mut div = Element::builder("div")
        .class(["container", "container-fluid"])
        .attrs(attributes! { id => "lead" })
        .build()?;
    div.add(Element::builder("p").text("another test").build()?)
        .add(
            Element::builder("img")
                .void(true)
                .attrs(attributes! { src => "/icon.png" })
                .build()?,
        );
    body.add(div);

    let mut doc = Element::top_level(root)?;
    doc.add(head).add(body);
    Ok(doc)
}
