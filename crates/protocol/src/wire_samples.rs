//! Shared wire-format fixtures for codec tests
//!
//! Three documented byte images with the events and schemes they
//! correspond to: the upstream protocol sample, a kitchen-sink container
//! event, and an event exercising every vector shape. Codec tests assert
//! these byte-for-byte in both directions.

use uuid::Uuid;

use crate::{Descriptor, Event, Key, Payload, Scheme, TypeTag, Value, Vector};

pub fn key(name: &str) -> Key {
    Key::new(name).unwrap()
}

fn leaf(d: Descriptor) -> Scheme {
    Scheme::Leaf(d)
}

// =============================================================================
// Upstream sample: two scalar tags
// =============================================================================

pub const GITHUB_SOURCE_ID: Uuid = Uuid::from_bytes([
    0x11, 0x20, 0x38, 0x00, 0x63, 0xFD, 0x11, 0xE8, 0x83, 0xE2, 0x3A, 0x58, 0x7D, 0x90, 0x20,
    0x00,
]);

pub const GITHUB_TIMESTAMP: i64 = 15_276_799_200_000_000;

pub fn github_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(0x01); // version 1
    buf.extend_from_slice(&[0x00, 0x36, 0x46, 0x2A, 0xFD, 0x9E, 0xF8, 0x00]); // timestamp ticks
    buf.extend_from_slice(GITHUB_SOURCE_ID.as_bytes());
    buf.extend_from_slice(&[0x00, 0x02]); // tag count 2

    buf.push(0x04); // key 'host'
    buf.extend_from_slice(b"host");
    buf.push(0x09); // string 'localhost'
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x09]);
    buf.extend_from_slice(b"localhost");

    buf.push(0x09); // key 'timestamp'
    buf.extend_from_slice(b"timestamp");
    buf.push(0x05); // long 1_527_679_920_000_000
    buf.extend_from_slice(&[0x00, 0x05, 0x6D, 0x6A, 0xB2, 0xF6, 0x4C, 0x00]);

    buf
}

pub fn github_event() -> Event {
    let mut payload = Payload::new();
    payload.insert(key("host"), Value::string(&b"localhost"[..]));
    payload.insert(key("timestamp"), Value::Long(1_527_679_920_000_000));
    Event::new(1, GITHUB_TIMESTAMP, GITHUB_SOURCE_ID, payload).unwrap()
}

pub fn github_scheme() -> Scheme {
    Scheme::object([
        (key("host"), leaf(Descriptor::String)),
        (key("timestamp"), leaf(Descriptor::Long)),
    ])
}

// =============================================================================
// Kitchen-sink container sample: every scalar kind plus nested containers
// =============================================================================

pub const SINK_SOURCE_ID: Uuid = Uuid::from_bytes([
    0xD9, 0xD0, 0xE8, 0xEA, 0x7C, 0x01, 0x4E, 0x72, 0x87, 0x04, 0x7F, 0x34, 0x0D, 0xA4, 0xE2,
    0x6A,
]);

pub const SINK_TIMESTAMP: i64 = 16_643_610_600_000_000;

pub const LONG_KEY: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_.-";

pub fn container_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(0x01);
    buf.extend_from_slice(&[0x00, 0x3B, 0x21, 0x46, 0x91, 0x97, 0xCA, 0x00]);
    buf.extend_from_slice(SINK_SOURCE_ID.as_bytes());
    buf.extend_from_slice(&[0x00, 0x0F]); // tag count 15

    buf.push(0x07);
    buf.extend_from_slice(b"c_uint8");
    buf.extend_from_slice(&[0x02, 0x01]); // byte 1

    buf.push(0x07);
    buf.extend_from_slice(b"c_int16");
    buf.extend_from_slice(&[0x03, 0x56, 0x06]); // short 22022

    buf.push(0x07);
    buf.extend_from_slice(b"c_int32");
    buf.extend_from_slice(&[0x04, 0x7F, 0xFF, 0xFF, 0xFF]); // integer i32::MAX

    buf.push(0x07);
    buf.extend_from_slice(b"c_int64");
    buf.extend_from_slice(&[0x05, 0x00, 0x05, 0x6D, 0x6A, 0xB2, 0xF6, 0x4C, 0x00]);

    buf.push(0x06);
    buf.extend_from_slice(b"c_bool");
    buf.extend_from_slice(&[0x06, 0x01]); // flag true

    buf.push(0x07);
    buf.extend_from_slice(b"c_float");
    buf.extend_from_slice(&[0x07, 0x3F, 0x80, 0x00, 0x00]); // float 1.0

    buf.push(0x08);
    buf.extend_from_slice(b"c_double");
    buf.extend_from_slice(&[0x08, 0x40, 0x08, 0x3D, 0x70, 0xA3, 0xD7, 0x0A, 0x3D]); // double 3.03

    buf.push(0x06);
    buf.extend_from_slice(b"string");
    buf.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x05]);
    buf.extend_from_slice(b"fdev1");

    buf.push(0x04);
    buf.extend_from_slice(b"UUID");
    buf.push(0x0A);
    buf.extend_from_slice(GITHUB_SOURCE_ID.as_bytes());

    buf.push(0x04);
    buf.extend_from_slice(b"None");
    buf.push(0x0B); // null, no body

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of-strings");
    buf.extend_from_slice(&[0x80, 0x09, 0x00, 0x00, 0x00, 0x03]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x05]);
    buf.extend_from_slice(b"first");
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x06]);
    buf.extend_from_slice(b"second");
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x05]);
    buf.extend_from_slice(b"third");

    buf.push(0x09);
    buf.extend_from_slice(b"container");
    buf.extend_from_slice(&[0x01, 0x00, 0x01]); // container, 1 tag
    buf.push(0x09);
    buf.extend_from_slice(b"host_name");
    buf.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x05]);
    buf.extend_from_slice(b"fdev2");

    buf.push(0x16);
    buf.extend_from_slice(b"container-in-container");
    buf.extend_from_slice(&[0x01, 0x00, 0x01]);
    buf.push(0x04);
    buf.extend_from_slice(b"host");
    buf.extend_from_slice(&[0x01, 0x00, 0x02]);
    buf.push(0x08);
    buf.extend_from_slice(b"hostname");
    buf.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x05]);
    buf.extend_from_slice(b"fdev2");
    buf.push(0x02);
    buf.extend_from_slice(b"os");
    buf.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x06]);
    buf.extend_from_slice(b"centos");

    buf.push(0x0F);
    buf.extend_from_slice(b"empty-container");
    buf.extend_from_slice(&[0x01, 0x00, 0x00]); // container, 0 tags

    buf.push(0x41); // 65-byte key covering the whole permitted charset
    buf.extend_from_slice(LONG_KEY.as_bytes());
    buf.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x00]); // empty string

    buf
}

pub fn container_event() -> Event {
    let mut inner = Payload::new();
    inner.insert(key("host_name"), Value::string(&b"fdev2"[..]));

    let mut host = Payload::new();
    host.insert(key("hostname"), Value::string(&b"fdev2"[..]));
    host.insert(key("os"), Value::string(&b"centos"[..]));
    let mut nested = Payload::new();
    nested.insert(key("host"), Value::Container(host));

    let strings = Vector::new(
        TypeTag::String,
        vec![
            Value::string(&b"first"[..]),
            Value::string(&b"second"[..]),
            Value::string(&b"third"[..]),
        ],
    )
    .unwrap();

    let mut payload = Payload::new();
    payload.insert(key("c_uint8"), Value::Byte(1));
    payload.insert(key("c_int16"), Value::Short(22022));
    payload.insert(key("c_int32"), Value::Integer(i32::MAX));
    payload.insert(key("c_int64"), Value::Long(1_527_679_920_000_000));
    payload.insert(key("c_bool"), Value::Flag(true));
    payload.insert(key("c_float"), Value::Float(1.0));
    payload.insert(key("c_double"), Value::Double(3.03));
    payload.insert(key("string"), Value::string(&b"fdev1"[..]));
    payload.insert(key("UUID"), Value::Guid(GITHUB_SOURCE_ID));
    payload.insert(key("None"), Value::Null);
    payload.insert(key("vector-of-strings"), Value::Vector(strings));
    payload.insert(key("container"), Value::Container(inner));
    payload.insert(key("container-in-container"), Value::Container(nested));
    payload.insert(key("empty-container"), Value::Container(Payload::new()));
    payload.insert(key(LONG_KEY), Value::string(&b""[..]));

    Event::new(1, SINK_TIMESTAMP, SINK_SOURCE_ID, payload).unwrap()
}

pub fn container_scheme() -> Scheme {
    Scheme::object([
        (key("c_uint8"), leaf(Descriptor::Byte)),
        (key("c_int16"), leaf(Descriptor::Short)),
        (key("c_int32"), leaf(Descriptor::Integer)),
        (key("c_int64"), leaf(Descriptor::Long)),
        (key("c_bool"), leaf(Descriptor::Flag)),
        (key("c_float"), leaf(Descriptor::Float)),
        (key("c_double"), leaf(Descriptor::Double)),
        (key("string"), leaf(Descriptor::String)),
        (key("UUID"), leaf(Descriptor::Guid)),
        (key("None"), leaf(Descriptor::Null)),
        (key("vector-of-strings"), leaf(Descriptor::VectorString)),
        (
            key("container"),
            Scheme::object([(key("host_name"), leaf(Descriptor::String))]),
        ),
        (
            key("container-in-container"),
            Scheme::object([(
                key("host"),
                Scheme::object([
                    (key("hostname"), leaf(Descriptor::String)),
                    (key("os"), leaf(Descriptor::String)),
                ]),
            )]),
        ),
        (key("empty-container"), leaf(Descriptor::ContainerDummy)),
        (key(LONG_KEY), leaf(Descriptor::String)),
    ])
}

// =============================================================================
// Vector sample: every vector shape, including nesting and emptiness
// =============================================================================

pub fn vectors_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(0x01);
    buf.extend_from_slice(&[0x00, 0x3B, 0x21, 0x46, 0x91, 0x97, 0xCA, 0x00]);
    buf.extend_from_slice(SINK_SOURCE_ID.as_bytes());
    buf.extend_from_slice(&[0x00, 0x0C]); // tag count 12

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of_c_uint8");
    buf.extend_from_slice(&[0x80, 0x02, 0x00, 0x00, 0x00, 0x02, 0x01, 0x02]);

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of_c_int16");
    buf.extend_from_slice(&[0x80, 0x03, 0x00, 0x00, 0x00, 0x03]);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x02, 0x00, 0x03]);

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of_c_int32");
    buf.extend_from_slice(&[0x80, 0x04, 0x00, 0x00, 0x00, 0x02]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02]);

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of_c_int64");
    buf.extend_from_slice(&[0x80, 0x05, 0x00, 0x00, 0x00, 0x03]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03]);

    buf.push(0x10);
    buf.extend_from_slice(b"vector-of_c_bool");
    buf.extend_from_slice(&[0x80, 0x06, 0x00, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x01]);

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of_c_float");
    buf.extend_from_slice(&[0x80, 0x07, 0x00, 0x00, 0x00, 0x02]);
    buf.extend_from_slice(&[0x3D, 0xCC, 0xCC, 0xCD, 0x3E, 0x4C, 0xCC, 0xCD]); // 0.1, 0.2

    buf.push(0x12);
    buf.extend_from_slice(b"vector-of_c_double");
    buf.extend_from_slice(&[0x80, 0x08, 0x00, 0x00, 0x00, 0x01]);
    buf.extend_from_slice(&[0x3F, 0xB9, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9A]); // 0.1

    buf.push(0x0E);
    buf.extend_from_slice(b"vector-of_UUID");
    buf.extend_from_slice(&[0x80, 0x0A, 0x00, 0x00, 0x00, 0x01]);
    buf.extend_from_slice(SINK_SOURCE_ID.as_bytes());

    buf.push(0x12);
    buf.extend_from_slice(b"vector-of_NoneType");
    buf.extend_from_slice(&[0x80, 0x0B, 0x00, 0x00, 0x00, 0x02]); // two nulls, no bodies

    buf.push(0x11);
    buf.extend_from_slice(b"vector-of-vectors");
    buf.extend_from_slice(&[0x80, 0x80, 0x00, 0x00, 0x00, 0x03]);
    buf.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x01, 0x01]);
    buf.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x02, 0x02, 0x03]);
    buf.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x03, 0x04, 0x05, 0x06]);

    buf.push(0x13);
    buf.extend_from_slice(b"vector-of-container");
    buf.extend_from_slice(&[0x80, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00]);

    buf.push(0x0C);
    buf.extend_from_slice(b"empty-vector");
    buf.extend_from_slice(&[0x80, 0x09, 0x00, 0x00, 0x00, 0x00]);

    buf
}

pub fn vectors_event() -> Event {
    fn byte_vec(values: &[u8]) -> Value {
        Value::Vector(
            Vector::new(TypeTag::Byte, values.iter().map(|v| Value::Byte(*v)).collect()).unwrap(),
        )
    }

    let nested = Vector::new(
        TypeTag::Vector,
        vec![byte_vec(&[1]), byte_vec(&[2, 3]), byte_vec(&[4, 5, 6])],
    )
    .unwrap();

    let mut payload = Payload::new();
    payload.insert(key("vector-of_c_uint8"), byte_vec(&[1, 2]));
    payload.insert(
        key("vector-of_c_int16"),
        Value::Vector(
            Vector::new(
                TypeTag::Short,
                vec![Value::Short(1), Value::Short(2), Value::Short(3)],
            )
            .unwrap(),
        ),
    );
    payload.insert(
        key("vector-of_c_int32"),
        Value::Vector(
            Vector::new(TypeTag::Integer, vec![Value::Integer(1), Value::Integer(2)]).unwrap(),
        ),
    );
    payload.insert(
        key("vector-of_c_int64"),
        Value::Vector(
            Vector::new(
                TypeTag::Long,
                vec![Value::Long(1), Value::Long(2), Value::Long(3)],
            )
            .unwrap(),
        ),
    );
    payload.insert(
        key("vector-of_c_bool"),
        Value::Vector(
            Vector::new(
                TypeTag::Flag,
                vec![
                    Value::Flag(true),
                    Value::Flag(false),
                    Value::Flag(false),
                    Value::Flag(true),
                ],
            )
            .unwrap(),
        ),
    );
    payload.insert(
        key("vector-of_c_float"),
        Value::Vector(
            Vector::new(TypeTag::Float, vec![Value::Float(0.1), Value::Float(0.2)]).unwrap(),
        ),
    );
    payload.insert(
        key("vector-of_c_double"),
        Value::Vector(Vector::new(TypeTag::Double, vec![Value::Double(0.1)]).unwrap()),
    );
    payload.insert(
        key("vector-of_UUID"),
        Value::Vector(Vector::new(TypeTag::Guid, vec![Value::Guid(SINK_SOURCE_ID)]).unwrap()),
    );
    payload.insert(
        key("vector-of_NoneType"),
        Value::Vector(Vector::new(TypeTag::Null, vec![Value::Null, Value::Null]).unwrap()),
    );
    payload.insert(key("vector-of-vectors"), Value::Vector(nested));
    payload.insert(
        key("vector-of-container"),
        Value::Vector(
            Vector::new(TypeTag::Container, vec![Value::Container(Payload::new())]).unwrap(),
        ),
    );
    payload.insert(
        key("empty-vector"),
        Value::Vector(Vector::empty(TypeTag::String)),
    );

    Event::new(1, SINK_TIMESTAMP, SINK_SOURCE_ID, payload).unwrap()
}

pub fn vectors_scheme() -> Scheme {
    Scheme::object([
        (key("vector-of_c_uint8"), leaf(Descriptor::VectorByte)),
        (key("vector-of_c_int16"), leaf(Descriptor::VectorShort)),
        (key("vector-of_c_int32"), leaf(Descriptor::VectorInteger)),
        (key("vector-of_c_int64"), leaf(Descriptor::VectorLong)),
        (key("vector-of_c_bool"), leaf(Descriptor::VectorFlag)),
        (key("vector-of_c_float"), leaf(Descriptor::VectorFloat)),
        (key("vector-of_c_double"), leaf(Descriptor::VectorDouble)),
        (key("vector-of_UUID"), leaf(Descriptor::VectorGuid)),
        (key("vector-of_NoneType"), leaf(Descriptor::VectorNull)),
        (
            key("vector-of-vectors"),
            Scheme::list([
                leaf(Descriptor::VectorByte),
                leaf(Descriptor::VectorByte),
                leaf(Descriptor::VectorByte),
            ]),
        ),
        (
            key("vector-of-container"),
            Scheme::list([leaf(Descriptor::ContainerDummy)]),
        ),
        (key("empty-vector"), leaf(Descriptor::VectorString)),
    ])
}
