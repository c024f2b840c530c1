//! Fuzzes the parts of the binary dictionary format that are meant to
//! tolerate arbitrary bytes: the flags codec and the header.
//!
//! The trie, ID table, and group sections all trust their caller to hand
//! them a well-formed, builder-produced file (per the format's invariants);
//! this target instead hammers the two codecs that sit at an actual input
//! boundary — `Flags::decode`, which is total over every `u16`, and
//! `Header::read`/`Header::write`, which round-trip a 272-byte record.
//! Neither should ever panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use chikkar::flags::Flags;
use chikkar::header::{Header, HEADER_SIZE};

fuzz_target!(|data: &[u8]| {
    if data.len() >= 2 {
        let word = u16::from_le_bytes([data[0], data[1]]);
        let flags = Flags::decode(word);
        // Every decoded Flags must re-encode: all sub-fields are masked to
        // their bit width on decode, so none can overflow on the way back.
        flags.encode().expect("decoded flags must always re-encode");
    }

    if data.len() >= HEADER_SIZE {
        let header = Header::read(data, 0);
        // A description decoded from arbitrary bytes may itself be too long
        // to re-encode (write() caps it at 256 UTF-8 bytes); both outcomes
        // are fine as long as neither panics.
        let _ = header.write();
    }
});
