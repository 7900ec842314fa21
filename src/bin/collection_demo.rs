use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use typed_collection::telemetry::recorder::ChangeRecorder;
use typed_collection::{ChangeKind, Element, Options, TypeTag, TypedCollection};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i64,
}

impl Element for Point {
    fn type_tag(&self) -> TypeTag {
        TypeTag::new("Point")
    }
}

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    // 2. Options (element type may be overridden from the environment)
    let mut options = Options::new().sort_by(|a: &Point, b: &Point| a.x.cmp(&b.x));
    if let Ok(name) = std::env::var("COLLECTION_TYPE") {
        options = options.element_type(TypeTag::from(name));
    }

    let mut points = TypedCollection::new(vec![Point { x: 33 }, Point { x: 11 }], options)
        .context("building seed collection")?;
    tracing::info!("Collection of `{}` ready with {} elements", points.element_type(), points.len());

    // 3. Observers
    let recorder = Rc::new(RefCell::new(ChangeRecorder::new()));
    ChangeRecorder::attach(&recorder, &points);
    points.events().subscribe(ChangeKind::Add, |change| {
        tracing::info!("[{}] {:?} -> length {}", change.namespace(), change.items, change.source.len());
    });

    // 4. Exercise
    points.push(vec![Point { x: 22 }])?;
    points.sort_or_by(|a, b| a.x.cmp(&b.x));
    let removed = points.splice(1, 1, vec![Point { x: 44 }, Point { x: 55 }])?;
    points.pop();

    let doubled = points.map(|p, _, _| Point { x: p.x * 2 })?;
    tracing::info!("Removed {:?}, doubled {:?}", removed.as_slice(), doubled.as_slice());

    let snapshot = recorder.borrow().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
