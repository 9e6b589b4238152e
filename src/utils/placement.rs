//! Window placement helpers

/// Top-left corner that centers a `child` sized window over a `parent` window
///
/// All values are physical pixels; `parent_origin` is the parent's top-left.
pub fn centered_origin(
    parent_origin: (i32, i32),
    parent_size: (u32, u32),
    child_size: (u32, u32),
) -> (i32, i32) {
    let offset = |parent: u32, child: u32| (i64::from(parent) - i64::from(child)) / 2;
    let x = i64::from(parent_origin.0) + offset(parent_size.0, child_size.0);
    let y = i64::from(parent_origin.1) + offset(parent_size.1, child_size.1);
    (saturate(x), saturate(y))
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
