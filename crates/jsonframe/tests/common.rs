#![allow(missing_docs)]

// A short signalling exchange: three messages separated by CRLF, the way a
// line-oriented transport would emit them. Framing attaches separator
// whitespace to the *following* message, so the expected frames are the
// first message bare and the later ones with their leading CRLF.
pub const MESSAGES: [&str; 3] = [
    r#"{"event":"session.start","id":17,"tags":["rtp\/avp","audio"]}"#,
    r#"{"event":"media","payload":{"codec":"opus","seq":[1,2,3]},"final":false}"#,
    r#"[{"op":"bye"},null,true]"#,
];

#[must_use]
pub fn stream() -> Vec<u8> {
    let mut out = Vec::new();
    for message in MESSAGES {
        out.extend_from_slice(message.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out
}

#[must_use]
pub fn expected_frames() -> [Vec<u8>; 3] {
    [
        MESSAGES[0].as_bytes().to_vec(),
        [b"\r\n", MESSAGES[1].as_bytes()].concat(),
        [b"\r\n", MESSAGES[2].as_bytes()].concat(),
    ]
}

// The same stream cut on transition seams: mid-keyword, mid-escape, between
// a closing bracket and the separator, and inside numbers.
#[rustfmt::skip]
#[must_use]
pub fn chunks() -> Vec<&'static [u8]> {
    vec![
        br#"{"event":"ses"#,                  // inside a string
        br#"sion.start","id":1"#,             // inside a number
        br#"7,"tags":["rtp\"#,                // between backslash and escape byte
        br#"/avp","au"#,
        br#"dio"]}"#,                         // message boundary, no separator yet
        b"\r",                                // half the CRLF
        br#"
{"event":"media","payload":{"codec":"opus","seq":[1,"#,
        br#"2,3]},"fin"#,                     // inside the "final" key
        br#"al":fal"#,                        // inside the false keyword
        br#"se}"#,
        b"\r\n[",                             // separator plus array open
        br#"{"op":"bye"},nu"#,                // inside null
        br#"ll,true]"#,
        b"\r\n",
    ]
}
