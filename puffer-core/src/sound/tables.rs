//! Fixed sample tables
//!
//! 8-bit unsigned amplitudes at the tick rate, biased around 0x80. Byte 0
//! never appears: the player reuses the first and last byte of a table as
//! both the fade target and the fade length in ticks, so every table starts
//! and ends on the bias level and the boundary fades are click-free.

/// One steam chuff: a shaped noise burst.
pub static ENGINE_SAMPLES: [u8; 256] = [
    0x80, 0x81, 0x7c, 0x78, 0x7b, 0x7f, 0x6a, 0x64, 0x51, 0x5b, 0x75, 0x6d, 0x56, 0x7c, 0x89, 0xba,
    0xcf, 0xc9, 0xe1, 0xd7, 0xde, 0x94, 0x6d, 0x53, 0xaf, 0x77, 0x97, 0xc8, 0x8f, 0x46, 0x7e, 0xa5,
    0x59, 0x93, 0x83, 0x50, 0x65, 0x75, 0x61, 0xa1, 0xaa, 0x81, 0x9c, 0x69, 0x6f, 0x6b, 0x90, 0x94,
    0x6f, 0x50, 0x4e, 0x85, 0x85, 0xa1, 0x73, 0x64, 0x8d, 0xa1, 0x90, 0x80, 0x8d, 0x99, 0x7f, 0x6c,
    0x82, 0x9b, 0xa7, 0x86, 0x69, 0x8d, 0xa2, 0xa3, 0xa1, 0x92, 0x8f, 0x9f, 0xa5, 0xa2, 0x97, 0x87,
    0x73, 0x86, 0x82, 0x72, 0x6f, 0x82, 0x71, 0x82, 0x7b, 0x75, 0x6d, 0x6e, 0x77, 0x73, 0x6b, 0x74,
    0x89, 0x7d, 0x88, 0x90, 0x89, 0x7b, 0x79, 0x84, 0x8f, 0x7d, 0x72, 0x6f, 0x72, 0x75, 0x7e, 0x83,
    0x87, 0x81, 0x8b, 0x85, 0x8a, 0x7d, 0x7a, 0x7f, 0x7e, 0x77, 0x75, 0x75, 0x7a, 0x77, 0x75, 0x77,
    0x7e, 0x7b, 0x80, 0x86, 0x80, 0x7a, 0x77, 0x79, 0x7e, 0x79, 0x79, 0x7c, 0x7c, 0x84, 0x81, 0x7f,
    0x81, 0x7e, 0x7d, 0x81, 0x7d, 0x7f, 0x7e, 0x81, 0x83, 0x84, 0x81, 0x82, 0x7f, 0x81, 0x7e, 0x80,
    0x7d, 0x7e, 0x7c, 0x7b, 0x7e, 0x7d, 0x81, 0x7d, 0x7f, 0x80, 0x80, 0x7d, 0x80, 0x7e, 0x81, 0x81,
    0x82, 0x84, 0x81, 0x81, 0x83, 0x81, 0x81, 0x81, 0x7f, 0x7f, 0x80, 0x81, 0x81, 0x82, 0x81, 0x82,
    0x83, 0x82, 0x7f, 0x7e, 0x80, 0x80, 0x81, 0x7f, 0x81, 0x7f, 0x7f, 0x7f, 0x81, 0x80, 0x7e, 0x80,
    0x81, 0x80, 0x7f, 0x7f, 0x81, 0x81, 0x80, 0x81, 0x80, 0x80, 0x80, 0x80, 0x7f, 0x80, 0x80, 0x81,
    0x80, 0x7f, 0x80, 0x7f, 0x7f, 0x7f, 0x7f, 0x80, 0x80, 0x80, 0x81, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
];

/// One bell strike with inharmonic partials; loops seamlessly.
pub static BELL_SAMPLES: [u8; 512] = [
    0x80, 0xd7, 0x9f, 0xb8, 0x97, 0x3b, 0x35, 0x6a, 0x75, 0x97, 0xeb, 0x9b, 0x6b, 0x7b, 0x27, 0x48,
    0x99, 0xa5, 0xae, 0xc1, 0x86, 0x32, 0x62, 0x56, 0x5f, 0xcd, 0xb6, 0x95, 0x94, 0x5b, 0x30, 0x60,
    0x94, 0x86, 0xc9, 0xbb, 0x5c, 0x6d, 0x51, 0x42, 0x89, 0xb5, 0xa5, 0xa2, 0x9c, 0x40, 0x49, 0x78,
    0x62, 0xaa, 0xc7, 0x92, 0x7d, 0x6e, 0x45, 0x4c, 0x9d, 0x96, 0xa0, 0xc3, 0x6e, 0x55, 0x65, 0x55,
    0x75, 0xb0, 0xb2, 0x89, 0x96, 0x62, 0x38, 0x7a, 0x7c, 0x8f, 0xbe, 0xa0, 0x71, 0x68, 0x62, 0x49,
    0x8b, 0xad, 0x8e, 0xae, 0x88, 0x4f, 0x60, 0x6c, 0x73, 0x9a, 0xbc, 0x8a, 0x7e, 0x7b, 0x41, 0x68,
    0x8f, 0x8c, 0xa6, 0xa7, 0x79, 0x5a, 0x6f, 0x5d, 0x73, 0xb2, 0x97, 0x92, 0x92, 0x5e, 0x55, 0x72,
    0x81, 0x89, 0xb2, 0x9b, 0x6c, 0x7c, 0x5b, 0x5a, 0x8f, 0x97, 0x97, 0x9d, 0x89, 0x59, 0x67, 0x75,
    0x6b, 0xa2, 0xa6, 0x86, 0x88, 0x70, 0x58, 0x6a, 0x8d, 0x89, 0x9b, 0xa6, 0x6f, 0x6d, 0x70, 0x5e,
    0x81, 0x9d, 0x97, 0x8d, 0x8e, 0x67, 0x5a, 0x7f, 0x76, 0x8d, 0xa9, 0x8b, 0x7b, 0x76, 0x66, 0x63,
    0x8a, 0x95, 0x8b, 0xa1, 0x7e, 0x63, 0x73, 0x6d, 0x78, 0x97, 0x9e, 0x86, 0x84, 0x78, 0x58, 0x78,
    0x86, 0x84, 0x9f, 0x94, 0x78, 0x70, 0x72, 0x67, 0x7e, 0x9d, 0x89, 0x91, 0x8a, 0x66, 0x6c, 0x78,
    0x7b, 0x8b, 0x9e, 0x8b, 0x78, 0x7f, 0x64, 0x6c, 0x8c, 0x88, 0x91, 0x95, 0x7f, 0x6b, 0x74, 0x74,
    0x75, 0x98, 0x92, 0x84, 0x8a, 0x71, 0x67, 0x78, 0x83, 0x85, 0x95, 0x93, 0x75, 0x79, 0x73, 0x69,
    0x86, 0x8f, 0x8b, 0x8d, 0x86, 0x6e, 0x6d, 0x7e, 0x77, 0x8c, 0x99, 0x83, 0x82, 0x7a, 0x6c, 0x73,
    0x86, 0x89, 0x8a, 0x95, 0x7b, 0x71, 0x7a, 0x70, 0x7e, 0x90, 0x8d, 0x86, 0x85, 0x77, 0x69, 0x7d,
    0x80, 0x82, 0x96, 0x89, 0x7b, 0x7a, 0x74, 0x71, 0x82, 0x8e, 0x85, 0x8d, 0x84, 0x6e, 0x78, 0x79,
    0x7b, 0x8b, 0x90, 0x85, 0x7f, 0x7e, 0x6d, 0x77, 0x87, 0x82, 0x8d, 0x8d, 0x7c, 0x77, 0x78, 0x76,
    0x7c, 0x8f, 0x88, 0x84, 0x87, 0x74, 0x73, 0x7d, 0x7e, 0x85, 0x8f, 0x89, 0x7a, 0x7e, 0x76, 0x72,
    0x86, 0x86, 0x87, 0x8b, 0x81, 0x75, 0x77, 0x7c, 0x7a, 0x8a, 0x8d, 0x81, 0x84, 0x7b, 0x72, 0x7b,
    0x82, 0x84, 0x89, 0x8b, 0x7c, 0x79, 0x7c, 0x74, 0x81, 0x8a, 0x86, 0x86, 0x83, 0x78, 0x74, 0x7f,
    0x7e, 0x83, 0x8e, 0x83, 0x7e, 0x7e, 0x76, 0x78, 0x83, 0x86, 0x84, 0x89, 0x80, 0x76, 0x7d, 0x7a,
    0x7d, 0x89, 0x88, 0x83, 0x81, 0x7d, 0x74, 0x7c, 0x83, 0x80, 0x8a, 0x87, 0x7c, 0x7d, 0x7a, 0x79,
    0x80, 0x88, 0x84, 0x84, 0x84, 0x77, 0x7a, 0x7e, 0x7d, 0x85, 0x89, 0x83, 0x7e, 0x7f, 0x78, 0x79,
    0x84, 0x82, 0x85, 0x88, 0x7e, 0x7a, 0x7c, 0x7c, 0x7d, 0x87, 0x87, 0x81, 0x83, 0x7b, 0x78, 0x7f,
    0x80, 0x82, 0x87, 0x85, 0x7d, 0x7d, 0x7d, 0x78, 0x82, 0x85, 0x83, 0x85, 0x81, 0x7a, 0x7b, 0x7e,
    0x7e, 0x83, 0x88, 0x81, 0x80, 0x7f, 0x78, 0x7d, 0x82, 0x82, 0x84, 0x86, 0x7f, 0x7b, 0x7e, 0x7b,
    0x7f, 0x86, 0x83, 0x83, 0x82, 0x7d, 0x7a, 0x7f, 0x80, 0x81, 0x87, 0x83, 0x7e, 0x7f, 0x7b, 0x7c,
    0x81, 0x84, 0x82, 0x84, 0x82, 0x7a, 0x7d, 0x7e, 0x7e, 0x84, 0x85, 0x81, 0x80, 0x7f, 0x7b, 0x7d,
    0x82, 0x81, 0x84, 0x85, 0x7e, 0x7e, 0x7d, 0x7c, 0x7f, 0x84, 0x83, 0x81, 0x82, 0x7c, 0x7b, 0x80,
    0x7f, 0x82, 0x84, 0x82, 0x7f, 0x7f, 0x7e, 0x7d, 0x81, 0x82, 0x81, 0x83, 0x80, 0x7e, 0x7f, 0x7f,
    0x7f, 0x81, 0x82, 0x80, 0x80, 0x80, 0x7e, 0x80, 0x80, 0x80, 0x81, 0x80, 0x80, 0x80, 0x80, 0x80,
];

/// One whistle cycle group; loops back-to-back during a window.
pub static WHISTLE_SAMPLES: [u8; 384] = [
    0x80, 0x82, 0x87, 0x87, 0x85, 0x81, 0x81, 0x81, 0x74, 0x63, 0x62, 0x6a, 0x89, 0xa5, 0xad, 0x9c,
    0x98, 0x91, 0x85, 0x88, 0x60, 0x39, 0x2e, 0x51, 0x8f, 0xae, 0xc0, 0xbd, 0x9f, 0x81, 0x83, 0x7e,
    0x5e, 0x37, 0x3a, 0x5c, 0x8f, 0xb5, 0xcc, 0xae, 0x9a, 0x83, 0x8a, 0x86, 0x5a, 0x44, 0x37, 0x4b,
    0x8e, 0xc6, 0xbb, 0xba, 0x94, 0x9a, 0x98, 0x84, 0x55, 0x41, 0x26, 0x52, 0x7e, 0xb3, 0xc6, 0xb5,
    0xa6, 0x83, 0x7f, 0x82, 0x59, 0x32, 0x37, 0x5a, 0x8e, 0xc3, 0xbf, 0xa9, 0x94, 0x86, 0x91, 0x85,
    0x61, 0x33, 0x37, 0x4c, 0x81, 0xc1, 0xd1, 0xbc, 0x8e, 0x8a, 0x81, 0x87, 0x60, 0x2f, 0x2d, 0x50,
    0x8f, 0xb1, 0xc3, 0xbc, 0xa2, 0x81, 0x81, 0x8a, 0x5b, 0x34, 0x3a, 0x4e, 0x94, 0xc2, 0xbc, 0xa6,
    0xa3, 0x81, 0x85, 0x75, 0x5e, 0x38, 0x35, 0x49, 0x97, 0xad, 0xc8, 0xab, 0x8e, 0x9a, 0x8b, 0x7a,
    0x51, 0x44, 0x2a, 0x48, 0x82, 0xb4, 0xc3, 0xbe, 0x8d, 0x8a, 0x83, 0x77, 0x5e, 0x38, 0x29, 0x57,
    0x8d, 0xb6, 0xba, 0xa6, 0x8f, 0x8d, 0x8f, 0x7d, 0x54, 0x32, 0x27, 0x5b, 0x91, 0xc3, 0xc5, 0xab,
    0x94, 0x8f, 0x98, 0x70, 0x59, 0x35, 0x3d, 0x49, 0x95, 0xc5, 0xc2, 0xaf, 0xa2, 0x8e, 0x91, 0x80,
    0x5d, 0x3e, 0x35, 0x4c, 0x86, 0xc3, 0xba, 0xbd, 0x99, 0x8d, 0x87, 0x82, 0x50, 0x34, 0x2f, 0x46,
    0x94, 0xb9, 0xbd, 0xba, 0x9a, 0x82, 0x91, 0x7c, 0x50, 0x2c, 0x35, 0x4a, 0x7f, 0xc1, 0xbe, 0xa6,
    0xa5, 0x8b, 0x93, 0x77, 0x62, 0x34, 0x36, 0x5c, 0x82, 0xb4, 0xbd, 0xb5, 0x95, 0x8f, 0x88, 0x79,
    0x60, 0x31, 0x38, 0x57, 0x8d, 0xc4, 0xc5, 0xbe, 0xa5, 0x95, 0x8f, 0x71, 0x60, 0x40, 0x24, 0x54,
    0x8c, 0xaf, 0xc4, 0xbf, 0xa0, 0x83, 0x84, 0x79, 0x65, 0x35, 0x39, 0x4e, 0x7e, 0xb7, 0xd0, 0xb9,
    0x8f, 0x88, 0x94, 0x86, 0x5e, 0x42, 0x35, 0x48, 0x8a, 0xb8, 0xbb, 0xbd, 0xa2, 0x90, 0x82, 0x77,
    0x5b, 0x34, 0x38, 0x51, 0x96, 0xad, 0xd1, 0xad, 0x9e, 0x8d, 0x8e, 0x7c, 0x59, 0x2f, 0x2e, 0x52,
    0x83, 0xb6, 0xc9, 0xbf, 0x94, 0x92, 0x8a, 0x86, 0x52, 0x33, 0x3d, 0x5b, 0x98, 0xc3, 0xc1, 0xad,
    0x96, 0x95, 0x85, 0x7e, 0x5f, 0x3b, 0x3a, 0x4d, 0x86, 0xb9, 0xbd, 0xad, 0x9f, 0x96, 0x96, 0x72,
    0x57, 0x33, 0x37, 0x5d, 0x93, 0xba, 0xcc, 0xac, 0x9d, 0x95, 0x8a, 0x83, 0x59, 0x42, 0x23, 0x4e,
    0x88, 0xb6, 0xc4, 0xba, 0x90, 0x94, 0x91, 0x78, 0x66, 0x35, 0x2b, 0x47, 0x85, 0xc5, 0xc0, 0xab,
    0x91, 0x95, 0x94, 0x76, 0x66, 0x33, 0x27, 0x5c, 0x89, 0xb3, 0xb4, 0xa2, 0x8e, 0x8a, 0x84, 0x7d,
    0x60, 0x5a, 0x4e, 0x6b, 0x7f, 0x97, 0x98, 0x92, 0x8c, 0x81, 0x7f, 0x82, 0x79, 0x78, 0x78, 0x80,
];

/// Which table is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Clip {
    Engine,
    Bell,
    Whistle,
}

impl Clip {
    /// Backing samples
    pub fn samples(&self) -> &'static [u8] {
        match self {
            Clip::Engine => &ENGINE_SAMPLES,
            Clip::Bell => &BELL_SAMPLES,
            Clip::Whistle => &WHISTLE_SAMPLES,
        }
    }
}
