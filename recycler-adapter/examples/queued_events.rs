// Example: a populate callback that asks for more data once the last loaded item is drawn.
//
// The callback cannot touch the recycler directly; it posts a `Refresh` to the controller's
// queue instead, and the controller applies it once the current scroll has finished.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use recycler::{GridConfig, Offset, RecyclerOptions, Size};
use recycler_adapter::{Controller, EventQueue, HostEvent};

fn main() {
    let loaded = Rc::new(Cell::new(200usize));
    let queue = Rc::new(RefCell::new(None::<EventQueue>));

    let options = RecyclerOptions::new(GridConfig::new(100.0, 40.0, 2), Size::new(200.0, 400.0));
    let mut c = Controller::new(options, {
        let loaded = Rc::clone(&loaded);
        let queue = Rc::clone(&queue);
        move |_, index| {
            if index + 1 == loaded.get() && loaded.get() < 1000 {
                loaded.set(loaded.get() + 200);
                if let Some(q) = queue.borrow().as_ref() {
                    q.push(HostEvent::Refresh(loaded.get()));
                }
            }
        }
    })
    .expect("valid grid");
    *queue.borrow_mut() = Some(c.queue());

    c.set_list(loaded.get()).expect("set_list");
    for step in 1..=12 {
        let max = c.recycler().geometry().max_scroll_offset(c.recycler().total_count());
        let moved = c.on_scroll(Offset::new(0.0, max)).expect("scroll");
        println!(
            "step {step}: count={} window={:?} moved={moved}",
            c.recycler().total_count(),
            c.recycler().window()
        );
    }

    let off = c.scroll_to_index(0).expect("scroll_to_index");
    println!("back to top: offset={off:?} window={:?}", c.recycler().window());
}
