#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use typed_collection::{ChangeKind, Element, TypeTag, TypedCollection};

/// Dynamic test value: two nominal types behind one Rust type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Item {
    Point { x: i64 },
    Label(String),
}

impl Element for Item {
    fn type_tag(&self) -> TypeTag {
        match self {
            Item::Point { .. } => TypeTag::new("Point"),
            Item::Label(_) => TypeTag::new("Label"),
        }
    }
}

pub fn p(x: i64) -> Item {
    Item::Point { x }
}

pub fn label(text: &str) -> Item {
    Item::Label(text.to_string())
}

pub fn x_of(item: &Item) -> i64 {
    match item {
        Item::Point { x } => *x,
        Item::Label(_) => panic!("not a point: {:?}", item),
    }
}

pub fn points(xs: &[i64]) -> TypedCollection<Item> {
    TypedCollection::from_elements(xs.iter().map(|&x| p(x)).collect()).unwrap()
}

pub fn xs(collection: &TypedCollection<Item>) -> Vec<i64> {
    collection.iter().map(x_of).collect()
}

/// Payloads of every `kind` event, in delivery order.
pub fn capture(collection: &TypedCollection<Item>, kind: ChangeKind) -> Rc<RefCell<Vec<Vec<Item>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    collection.events().subscribe(kind, move |change| {
        sink.borrow_mut().push(change.items.to_vec());
    });
    log
}

/// `(namespace, item count)` of every event, in delivery order.
pub fn capture_all(collection: &TypedCollection<Item>) -> Rc<RefCell<Vec<(&'static str, usize)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    collection.events().subscribe_all(move |change| {
        sink.borrow_mut().push((change.namespace(), change.items.len()));
    });
    log
}
