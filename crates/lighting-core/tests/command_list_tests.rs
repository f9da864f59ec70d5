//! Packet encoding of the fixed-capacity command list.

use lighting_core::gpu::{CommandList, CommandListError, CommandStream, MAX_PACKET_PARAMS};

#[test]
fn test_single_write_is_padded_to_even_length() {
    let mut list = CommandList::<16>::new();
    list.write_register(0x1C0, 0xAABB_CCDD).unwrap();

    assert_eq!(list.as_words(), &[0xAABB_CCDD, 0x000F_01C0]);
}

#[test]
fn test_incremental_write_header() {
    let mut list = CommandList::<16>::new();
    list.write_registers_incremental(0x1C2, &[1, 2, 3]).unwrap();

    // 4 words, no padding needed.
    assert_eq!(list.as_words(), &[1, 0x802F_01C2, 2, 3]);

    let packet = list.packets().next().unwrap();
    assert_eq!(packet.register, 0x1C2);
    assert_eq!(packet.mask, 0xF);
    assert!(packet.incremental);
    assert_eq!(packet.params.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_bulk_write_decodes_back() {
    let mut list = CommandList::<64>::new();
    list.write_register(0x1C5, 0x800).unwrap();
    list.write_registers_bulk(0x1C8, &[10, 11, 12, 13, 14, 15, 16, 17])
        .unwrap();
    list.write_registers_incremental(0x140, &[0; 12]).unwrap();

    // 2 + (9 + 1) + (13 + 1)
    assert_eq!(list.len(), 26);

    let packets: Vec<_> = list.packets().collect();
    assert_eq!(packets.len(), 3);
    assert_eq!(packets[0].params.get(0), Some(0x800));
    assert_eq!(packets[1].register, 0x1C8);
    assert!(!packets[1].incremental);
    assert_eq!(packets[1].params.len(), 8);
    assert_eq!(packets[1].params.get(7), Some(17));
    assert_eq!(packets[1].params.get(8), None);
    assert_eq!(packets[2].register, 0x140);
    assert_eq!(packets[2].params.len(), 12);
}

#[test]
fn test_long_incremental_write_splits_and_advances() {
    let words: Vec<u32> = (0..300).collect();
    let mut list = CommandList::<512>::new();
    list.write_registers_incremental(0x100, &words).unwrap();

    let packets: Vec<_> = list.packets().collect();
    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0].params.len(), MAX_PACKET_PARAMS);
    assert_eq!(packets[1].register, 0x100 + MAX_PACKET_PARAMS as u16);
    assert_eq!(packets[1].params.len(), 300 - MAX_PACKET_PARAMS);
    assert_eq!(packets[1].params.get(0), Some(256));
}

#[test]
fn test_overflow_writes_nothing() {
    let mut list = CommandList::<8>::new();
    list.write_registers_incremental(0x1C2, &[1, 2, 3]).unwrap();

    let err = list.write_registers_bulk(0x1C8, &[0; 8]).unwrap_err();
    assert_eq!(
        err,
        CommandListError::Full {
            needed: 10,
            available: 4
        }
    );
    assert_eq!(list.len(), 4);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.remaining(), 8);
}

#[test]
fn test_empty_write_is_noop() {
    let mut list = CommandList::<4>::new();
    list.write_registers_bulk(0x1C8, &[]).unwrap();
    assert!(list.is_empty());
}
