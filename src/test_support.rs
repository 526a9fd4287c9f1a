//! Fixture builders shared by the unit tests

use std::path::Path;

/// Info text of the "2016-11-05 - Recondite - Essential Mix" episode
pub(crate) const SAMPLE_INFO: &str = "\
2016-11-05 - Recondite - Essential Mix\r
\r
ESSENTIAL MIX EPISODE: 1187\r
\r
Recondite steps up for his debut Essential Mix, a two hour journey through\r
melancholic techno, recorded at his studio in the Bavarian countryside.\r
\r
Tracklist:\r
01. Recondite - Levitate\r
02. Recondite - Caldera\r
03. Unknown - ID\r
";

/// Name of the audio file written by [`write_episode_dir`]
pub(crate) const SAMPLE_AUDIO_NAME: &str = "2016-11-05 - Recondite - Essential Mix.m4a";

/// Timescale and duration units written into the sample audio (7191.6s)
pub(crate) const SAMPLE_TIMESCALE: u32 = 1000;
pub(crate) const SAMPLE_DURATION_UNITS: u32 = 7_191_600;

/// Encodes a string as UTF-16LE without a byte order mark
pub(crate) fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect()
}

/// Builds a minimal M4A file: `ftyp`, a `moov` holding only `mvhd`, and an
/// `mdat` with `payload_len` zero bytes
pub(crate) fn m4a_bytes(timescale: u32, duration: u32, payload_len: usize) -> Vec<u8> {
    let mut bytes = Vec::new();

    // ftyp: major brand, minor version, two compatible brands
    push_box_header(&mut bytes, 24, b"ftyp");
    bytes.extend_from_slice(b"M4A ");
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(b"M4A ");
    bytes.extend_from_slice(b"isom");

    // moov > mvhd (version 0)
    push_box_header(&mut bytes, 8 + 108, b"moov");
    push_box_header(&mut bytes, 108, b"mvhd");
    bytes.extend_from_slice(&0u32.to_be_bytes()); // version + flags
    bytes.extend_from_slice(&0u32.to_be_bytes()); // creation time
    bytes.extend_from_slice(&0u32.to_be_bytes()); // modification time
    bytes.extend_from_slice(&timescale.to_be_bytes());
    bytes.extend_from_slice(&duration.to_be_bytes());
    bytes.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
    bytes.extend_from_slice(&0x0100u16.to_be_bytes()); // volume 1.0
    bytes.extend_from_slice(&[0u8; 10]); // reserved
    for value in [0x0001_0000u32, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000] {
        bytes.extend_from_slice(&value.to_be_bytes()); // unity matrix
    }
    bytes.extend_from_slice(&[0u8; 24]); // pre-defined
    bytes.extend_from_slice(&1u32.to_be_bytes()); // next track id

    push_box_header(&mut bytes, 8 + payload_len as u32, b"mdat");
    bytes.resize(bytes.len() + payload_len, 0);

    bytes
}

fn push_box_header(bytes: &mut Vec<u8>, size: u32, kind: &[u8; 4]) {
    bytes.extend_from_slice(&size.to_be_bytes());
    bytes.extend_from_slice(kind);
}

/// Populates `dir` with the sample info text (UTF-16LE with BOM) and audio
pub(crate) fn write_episode_dir(dir: &Path) {
    let mut info = vec![0xFF, 0xFE];
    info.extend(encode_utf16le(SAMPLE_INFO));
    std::fs::write(dir.join("info.txt"), info).unwrap();

    std::fs::write(
        dir.join(SAMPLE_AUDIO_NAME),
        m4a_bytes(SAMPLE_TIMESCALE, SAMPLE_DURATION_UNITS, 4096),
    )
    .unwrap();
}
