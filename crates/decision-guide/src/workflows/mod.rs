pub mod normative;
