//! Integration test: the full public container contract, end to end.
//!
//! Drives all three containers through their exported API only — no access
//! to backing storage — the way a consumer program would. Covers creation
//! validation, bounds checking, growth across multiple capacity doublings,
//! removal semantics, iteration, and rendering.

use creel::prelude::*;

#[test]
fn fixed_array_contract() {
    assert!(FixedArray::<u8>::new(0).is_err());

    let mut scores: FixedArray<u32> = FixedArray::new(5).unwrap();
    assert_eq!(scores.len(), 5);
    assert!(scores.iter().all(|slot| slot.is_none()));

    for i in 0..5 {
        scores.set(i, (i as u32 + 1) * 10).unwrap();
    }
    assert_eq!(scores.get(4), Ok(Some(&50)));
    assert_eq!(scores.to_string(), "(10,20,30,40,50)");

    scores.clear(Some(0));
    assert!(scores.iter().all(|slot| slot == Some(&0)));
}

#[test]
fn dynamic_array_survives_many_doublings() {
    let mut values = DynamicArray::new();
    for v in 0..1000u32 {
        values.append(v);
    }
    assert_eq!(values.len(), 1000);
    assert_eq!(values.capacity(), 1024);
    for (i, &v) in values.iter().enumerate() {
        assert_eq!(v, i as u32);
    }
}

#[test]
fn dynamic_array_insert_and_remove_keep_order() {
    let mut names = DynamicArray::new();
    names.append("ada");
    names.append("grace");
    names.insert(1, "edsger").unwrap();
    names.insert(0, "alan").unwrap();
    assert_eq!(names.to_string(), "(alan,ada,edsger,grace)");

    names.remove(&"edsger").unwrap();
    assert_eq!(names.to_string(), "(alan,ada,grace)");
    assert_eq!(names.remove(&"edsger"), Err(ArrayError::ValueNotFound));
    assert_eq!(names.len(), 3);
}

#[test]
fn array2d_holds_a_full_table() {
    let mut table = Array2D::new(3, 4).unwrap();
    for row in 0..3 {
        for col in 0..4 {
            table.set(row, col, row * 10 + col).unwrap();
        }
    }
    for row in 0..3 {
        for col in 0..4 {
            assert_eq!(table.get(row, col), Ok(Some(&(row * 10 + col))));
        }
    }
    assert!(table.get(3, 0).is_err());
    assert!(table.get(0, 4).is_err());
}

#[test]
fn errors_are_reportable_through_a_boxed_chain() {
    fn read_cell(grid: &Array2D<i32>) -> Result<i32, Box<dyn std::error::Error>> {
        let cell = grid.get(9, 9)?;
        Ok(cell.copied().unwrap_or(0))
    }

    let grid = Array2D::new(2, 2).unwrap();
    let err = read_cell(&grid).unwrap_err();
    assert_eq!(err.to_string(), "index 9 out of range for length 2");
}
