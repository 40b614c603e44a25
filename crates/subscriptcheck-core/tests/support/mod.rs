#![allow(dead_code)]

pub mod insights_testkit;
