#![no_std]

mod contract;
mod controller;
mod events;
mod interfaces;
mod math;
mod storage;
