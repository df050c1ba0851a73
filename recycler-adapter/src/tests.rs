use crate::*;

use core::cell::{Cell, RefCell};
use recycler::{GridConfig, Offset, RecyclerOptions, Size, SlotId, VisibleWindow};
use std::rc::Rc;
use std::vec::Vec;

fn options() -> RecyclerOptions {
    // 4 columns, 11 rows of 50px slots: capacity 44.
    RecyclerOptions::new(GridConfig::new(100.0, 50.0, 4), Size::new(400.0, 500.0))
}

#[test]
fn controller_applies_set_list_and_scroll() {
    let calls = Rc::new(RefCell::new(Vec::<(SlotId, usize)>::new()));
    let mut c = Controller::new(options(), {
        let calls = Rc::clone(&calls);
        move |slot, index| calls.borrow_mut().push((slot, index))
    })
    .unwrap();

    assert_eq!(c.set_list(1000).unwrap(), 0);
    assert_eq!(calls.borrow().len(), 44);

    assert_eq!(c.on_scroll(Offset::new(0.0, 550.0)).unwrap(), 40);
    assert_eq!(
        c.recycler().window(),
        Some(VisibleWindow::new(40, 83).unwrap())
    );
    assert_eq!(calls.borrow().len(), 84);
}

#[test]
fn events_posted_from_populate_run_after_the_current_call() {
    let queue = Rc::new(RefCell::new(None::<EventQueue>));
    let requested = Rc::new(Cell::new(false));
    let mut c = Controller::new(options(), {
        let queue = Rc::clone(&queue);
        let requested = Rc::clone(&requested);
        move |_, index| {
            // Ask for a jump the first time the last item of the first window is drawn.
            if index == 43 && !requested.replace(true) {
                if let Some(q) = queue.borrow().as_ref() {
                    q.push(HostEvent::Scroll(Offset::new(0.0, 12000.0)));
                }
            }
        }
    })
    .unwrap();
    *queue.borrow_mut() = Some(c.queue());

    assert_eq!(c.set_list(1000).unwrap(), 44);
    assert!(requested.get());
    assert!(c.queue().is_empty());
    assert_eq!(
        c.recycler().window(),
        Some(VisibleWindow::new(956, 999).unwrap())
    );
}

#[test]
fn drain_runs_posted_events_in_order() {
    let mut c = Controller::new(options(), |_, _| {}).unwrap();
    c.post(HostEvent::SetList(1000));
    c.post(HostEvent::Scroll(Offset::new(0.0, 500.0)));
    c.post(HostEvent::Refresh(50));
    assert_eq!(c.queue().len(), 3);

    c.drain().unwrap();
    assert!(c.queue().is_empty());
    assert_eq!(c.recycler().total_count(), 50);
    assert_eq!(
        c.recycler().window(),
        Some(VisibleWindow::new(6, 49).unwrap())
    );
}

#[test]
fn scroll_to_index_returns_the_applied_offset() {
    let mut c = Controller::new(options(), |_, _| {}).unwrap();
    c.set_list(1000).unwrap();

    let off = c.scroll_to_index(401).unwrap();
    assert_eq!(off, Offset::new(0.0, 5000.0));
    let window = c.recycler().window().unwrap();
    assert!(window.contains(401));
    assert_eq!(window, VisibleWindow::new(396, 439).unwrap());

    let off = c.scroll_to_index(999).unwrap();
    assert_eq!(off, Offset::new(0.0, 12000.0));
    assert_eq!(
        c.recycler().window(),
        Some(VisibleWindow::new(956, 999).unwrap())
    );
}
