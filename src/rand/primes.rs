//! 64-bit primes used as state multipliers.

pub const PRIMES: [u64; 16] = [
    0xf06d3fef701966a1,
    0xe901e35cd47d380d,
    0xd8f33418f3d4e711,
    0x8cfe5cd12d5db79b,
    0xc155d7ef28dd37eb,
    0xff1a355e526eb523,
    0x9d3b993f79490eab,
    0xfa0b85188296f5eb,
    0xf21754ef2904aced,
    0x9f7a7dafb43adc4f,
    0xa20d672b15ad9a9d,
    0xe9dd649317788b95,
    0xb5263b4519a2105d,
    0xd1fbfcc798b8da9f,
    0xc0041e001c823d9f,
    0xc725bd979e289761,
];
