use dtix_wire::Cursor;
use dtix_wire::writer::put_u32_le;

use crate::error::TypeError;
use crate::fields::{encode_string, read_string};
use crate::limits::DecodeLimits;
use crate::mapping::TicketAreaMapping;

/// Read a count-prefixed Borsh `Vec<T>`, using `read` for each element.
///
/// Wire layout:
/// ```text
///   count (u32 LE) │ element 0 │ element 1 │ ... │ element count-1
/// ```
///
/// The count is checked against `limits.max_vector_len` first. When it is
/// over the bound no element is read and the cursor stays just after the
/// count (vector start + 4). A wildly large count almost always means the
/// cursor is misaligned, and reading on would only turn that into a pile
/// of garbage elements or an underrun further along.
///
/// Elements are read in order. The first failing element aborts the
/// vector; its error is wrapped in [`TypeError::VectorElement`] with the
/// vector's start offset and the element index.
///
/// # Errors
///
/// - [`TypeError::ImplausibleCount`] if the count is over the bound.
/// - [`TypeError::Wire`] if the count itself is truncated.
/// - [`TypeError::VectorElement`] wrapping the first element failure.
pub fn read_vec<'a, T, F>(
    cursor: &mut Cursor<'a>,
    limits: &DecodeLimits,
    mut read: F,
) -> Result<Vec<T>, TypeError>
where
    F: FnMut(&mut Cursor<'a>) -> Result<T, TypeError>,
{
    let vector_offset = cursor.position();
    let declared = cursor.read_u32_le()?;

    if declared > limits.max_vector_len {
        return Err(TypeError::ImplausibleCount {
            offset: vector_offset,
            declared,
            bound: limits.max_vector_len,
        });
    }

    // Every element takes at least one byte, so the buffer caps the
    // reservation even when the caller's bound does not.
    let mut items = Vec::with_capacity((declared as usize).min(cursor.remaining()));
    for index in 0..declared {
        let item = read(cursor).map_err(|source| TypeError::VectorElement {
            vector_offset,
            index,
            source: Box::new(source),
        })?;
        items.push(item);
    }

    Ok(items)
}

/// Read a `Vec<String>`, each element checked per [`read_string`].
///
/// # Errors
///
/// See [`read_vec`] and [`read_string`].
pub fn read_string_vec(
    cursor: &mut Cursor<'_>,
    limits: &DecodeLimits,
) -> Result<Vec<String>, TypeError> {
    read_vec(cursor, limits, |c| read_string(c, limits))
}

/// Read the ticket-area mapping vector, splitting every element.
///
/// # Errors
///
/// See [`read_vec`] and [`read_string`].
pub fn read_ticket_area_mappings(
    cursor: &mut Cursor<'_>,
    limits: &DecodeLimits,
) -> Result<Vec<TicketAreaMapping>, TypeError> {
    read_vec(cursor, limits, |c| {
        read_string(c, limits).map(TicketAreaMapping::from)
    })
}

/// Append a count-prefixed vector of strings.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_string_vec<S: AsRef<str>>(buf: &mut Vec<u8>, items: &[S]) {
    put_u32_le(buf, items.len() as u32);
    for item in items {
        encode_string(buf, item.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reads_mapping_vector() {
        let mut buf = Vec::new();
        encode_string_vec(&mut buf, &["VIP-A1", "GA-B2"]);

        let mut cursor = Cursor::new(&buf);
        let mappings = read_ticket_area_mappings(&mut cursor, &DecodeLimits::default()).unwrap();
        assert_eq!(
            mappings,
            vec![
                TicketAreaMapping::new("VIP", "A1"),
                TicketAreaMapping::new("GA", "B2"),
            ]
        );
        assert_eq!(cursor.position(), buf.len());
    }

    #[test]
    fn empty_vector_consumes_only_count() {
        let buf = 0u32.to_le_bytes();
        let mut cursor = Cursor::new(&buf);
        let items = read_string_vec(&mut cursor, &DecodeLimits::default()).unwrap();
        assert!(items.is_empty());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn implausible_count_reads_no_elements() {
        let mut buf = vec![0xEE; 3];
        buf.extend_from_slice(&1_000_000u32.to_le_bytes());
        let mut cursor = Cursor::new(&buf);
        cursor.skip(3).unwrap();

        let err = read_string_vec(&mut cursor, &DecodeLimits::default()).unwrap_err();
        assert_eq!(
            err,
            TypeError::ImplausibleCount {
                offset: 3,
                declared: 1_000_000,
                bound: 100
            }
        );
        assert_eq!(cursor.position(), 3 + 4);
    }

    #[test]
    fn count_at_bound_is_accepted() {
        let items: Vec<String> = (0..5).map(|i| format!("T{i}-A{i}")).collect();
        let mut buf = Vec::new();
        encode_string_vec(&mut buf, items.as_slice());

        let mut cursor = Cursor::new(&buf);
        let read = read_string_vec(&mut cursor, &DecodeLimits::new(1024, 5)).unwrap();
        assert_eq!(read, items);
    }

    #[test]
    fn element_failure_carries_vector_offset() {
        let mut buf = Vec::new();
        put_u32_le(&mut buf, 2);
        encode_string(&mut buf, "VIP-A1");
        put_u32_le(&mut buf, 4096); // second element length is absurd

        let mut cursor = Cursor::new(&buf);
        let err = read_string_vec(&mut cursor, &DecodeLimits::default()).unwrap_err();

        match &err {
            TypeError::VectorElement {
                vector_offset,
                index,
                source,
            } => {
                assert_eq!(*vector_offset, 0);
                assert_eq!(*index, 1);
                assert!(matches!(**source, TypeError::InvalidLength { declared: 4096, .. }));
            }
            other => panic!("expected VectorElement, got {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert_eq!(err.offset(), 4 + 4 + 6);
    }

    #[test]
    fn huge_count_under_loose_bound_reserves_only_what_fits() {
        let mut buf = Vec::new();
        put_u32_le(&mut buf, 0xFFFF_FFF0);
        encode_string(&mut buf, "VIP-A1");

        let mut cursor = Cursor::new(&buf);
        let err = read_string_vec(&mut cursor, &DecodeLimits::new(1024, u32::MAX)).unwrap_err();
        match &err {
            TypeError::VectorElement { index, .. } => assert_eq!(*index, 1),
            other => panic!("expected VectorElement, got {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::BufferUnderrun);
        assert_eq!(err.offset(), buf.len());
    }

    #[test]
    fn truncated_element_underruns() {
        let mut buf = Vec::new();
        put_u32_le(&mut buf, 3);
        encode_string(&mut buf, "A-1");

        let mut cursor = Cursor::new(&buf);
        let err = read_string_vec(&mut cursor, &DecodeLimits::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferUnderrun);
    }
}
