mod advisor;
mod common;
mod filtering;
mod presentation;
mod service;
