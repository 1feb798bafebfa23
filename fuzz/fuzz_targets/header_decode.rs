#![no_main]

use libfuzzer_sys::fuzz_target;
use ssh_agent_reply_header::proto::{IdentitiesAnswerHeader, ReplyHeader, SignResponseHeader};
use ssh_encoding::Decode;

fuzz_target!(|data: &[u8]| {
    let _ = IdentitiesAnswerHeader::from_bytes(data);
    let _ = SignResponseHeader::from_bytes(data);
    let _ = ReplyHeader::decode(&mut &data[..]);
});
