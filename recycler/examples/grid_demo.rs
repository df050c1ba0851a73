// Example: a vertical and a horizontal grid of 1000 labelled cells sharing nothing but the
// recycler logic. Each "cell" is just a label string owned by the host.
use std::cell::RefCell;
use std::rc::Rc;

use recycler::{GridConfig, LayoutAxis, Offset, Recycler, RecyclerOptions, Size};

fn build(grid: GridConfig, viewport: Size) -> (Recycler, Rc<RefCell<Vec<String>>>) {
    let labels = Rc::new(RefCell::new(Vec::new()));
    let options = RecyclerOptions::new(grid, viewport)
        .with_on_create({
            let labels = Rc::clone(&labels);
            move |_| labels.borrow_mut().push(String::new())
        })
        .with_on_content_size(|size| println!("  content size = {size:?}"));
    let r = Recycler::new(options).expect("valid grid");
    (r, labels)
}

fn populate(labels: &Rc<RefCell<Vec<String>>>) -> impl FnMut(recycler::SlotId, usize) + 'static {
    let labels = Rc::clone(labels);
    move |slot, index| labels.borrow_mut()[slot.local_index()] = index.to_string()
}

fn show(name: &str, r: &Recycler, labels: &Rc<RefCell<Vec<String>>>) {
    let labels = labels.borrow();
    let mut first = Vec::new();
    r.for_each_bound(|_, slot| {
        if first.len() < 8 {
            first.push(labels[slot.local_index()].clone());
        }
    });
    println!(
        "  {name}: window={:?} slots={} first_labels={first:?}",
        r.window(),
        r.slot_count()
    );
}

fn main() {
    println!("vertical:");
    let (mut v, v_labels) = build(GridConfig::new(100.0, 50.0, 4), Size::new(400.0, 500.0));
    v.set_list(1000, populate(&v_labels)).expect("set_list");
    show("top", &v, &v_labels);
    let moved = v.on_scroll(Offset::new(0.0, 500.0)).expect("scroll");
    show(&format!("y=500 (moved {moved})"), &v, &v_labels);
    let moved = v.on_scroll(Offset::new(0.0, 12000.0)).expect("scroll");
    show(&format!("bottom (moved {moved})"), &v, &v_labels);

    println!("horizontal:");
    let (mut h, h_labels) = build(
        GridConfig::new(80.0, 80.0, 3)
            .with_spacing(4.0, 4.0)
            .with_axis(LayoutAxis::ColumnMajor),
        Size::new(600.0, 250.0),
    );
    h.set_list(1000, populate(&h_labels)).expect("set_list");
    show("left", &h, &h_labels);
    let moved = h.on_scroll(Offset::new(-840.0, 0.0)).expect("scroll");
    show(&format!("x=-840 (moved {moved})"), &h, &h_labels);
    h.refresh(120, populate(&h_labels)).expect("refresh");
    show("refreshed to 120 items", &h, &h_labels);
}
