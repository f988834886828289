use catena::{List, ListResult, Value};
use tracing::{debug, info, info_span};

/// Appends `1..=count`, shows the list, reverses it, shows it again and
/// tears it down.
pub fn run(count: Value, mut show: impl FnMut(&List)) -> ListResult<()> {
    let span = info_span!("scenario");
    let _guard = span.enter();

    let mut list = List::new();
    for value in 1..=count {
        list.insert_at_tail(value)?;
    }
    debug!(length = list.length(), "filled list");
    show(&list);

    list.reverse();
    show(&list);

    list.destroy();
    info!(
        length = list.length(),
        empty = list.is_empty(),
        "list destroyed"
    );
    Ok(())
}
