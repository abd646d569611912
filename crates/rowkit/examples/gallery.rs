//! A learning-material gallery driven by one generic controller.
//!
//! Three row kinds (newsletters, courses, books) share a single
//! `ListController<CellData>`; each kind contributes a mapping case and a
//! cell kind, nothing else. Run with `RUST_LOG=debug` to watch the one-time
//! cell kind registrations.

use rowkit::{
    CellDescriptor, CellLease, CellPool, Color, ListController, SubtitleCell, TextCell, ValueCell,
};

// -----------------------------------------------------------------------------
// Models
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Newsletter {
    title: String,
    print_date: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Course {
    name: String,
    publisher: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Book {
    title: String,
    author: String,
}

/// One displayable row: exactly one of the three record kinds.
#[derive(Debug, Clone, PartialEq)]
enum CellData {
    Newsletter(Newsletter),
    Course(Course),
    Book(Book),
}

impl CellData {
    /// The descriptor for this row kind. Adding a row kind means adding a
    /// match arm here and a cell kind for it; the controller never changes.
    fn descriptor(&self) -> CellDescriptor {
        match self {
            CellData::Newsletter(newsletter) => {
                let title = newsletter.title.clone();
                let print_date = newsletter.print_date.clone();
                CellDescriptor::new("newsletter", move |cell: &mut SubtitleCell| {
                    cell.set_text(title);
                    cell.set_detail_text(print_date);
                    cell.set_detail_text_color(Color::ORANGE);
                })
            }
            CellData::Course(course) => {
                let name = course.name.clone();
                CellDescriptor::new("course", move |cell: &mut TextCell| {
                    cell.set_text(name);
                    cell.set_text_color(Color::RED);
                })
            }
            CellData::Book(book) => {
                let title = book.title.clone();
                CellDescriptor::new("book", move |cell: &mut ValueCell| {
                    cell.set_text(title);
                })
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Dummy data
// -----------------------------------------------------------------------------

fn dummy_rows() -> Vec<CellData> {
    let newsletters = [
        Newsletter {
            title: "iOS Dev".into(),
            print_date: "10.01.2020".into(),
        },
        Newsletter {
            title: "iOSCon Munich".into(),
            print_date: "12.01.2020".into(),
        },
    ];

    let courses = [
        Course {
            name: "Raywenderlich.com".into(),
            publisher: "Ray wenderlich video team".into(),
        },
        Course {
            name: "hackingwithswift.com".into(),
            publisher: "Paul Hudson".into(),
        },
    ];

    let books = [
        Book {
            title: "iOS Programming".into(),
            author: "Christian Keur, Aaron Hillegass".into(),
        },
        Book {
            title: "iOS Apprentice".into(),
            author: "Joey deVilla, Eli Ganem, Matthijs Hollemans".into(),
        },
        Book {
            title: "Native Mobile Development".into(),
            author: "Shaun Lewis, Mike Dunn".into(),
        },
    ];

    newsletters
        .into_iter()
        .map(CellData::Newsletter)
        .chain(courses.into_iter().map(CellData::Course))
        .chain(books.into_iter().map(CellData::Book))
        .collect()
}

// -----------------------------------------------------------------------------
// Show data
// -----------------------------------------------------------------------------

fn print_cell(index: usize, lease: &CellLease) {
    // The demo knows its three cell kinds, so probing each is exhaustive.
    if let Some(cell) = lease.downcast_ref::<SubtitleCell>() {
        println!("  [{index}] {cell}");
    } else if let Some(cell) = lease.downcast_ref::<TextCell>() {
        println!("  [{index}] {cell}");
    } else if let Some(cell) = lease.downcast_ref::<ValueCell>() {
        println!("  [{index}] {cell}");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut controller = ListController::new("iOS learning", dummy_rows(), |row: &CellData| {
        row.descriptor()
    });
    controller.set_on_select(|row: &CellData| match row {
        CellData::Newsletter(newsletter) => println!("selected newsletter: {}", newsletter.title),
        CellData::Course(course) => println!("selected course: {}", course.name),
        CellData::Book(book) => println!("selected book: {}", book.title),
    });

    let mut pool = CellPool::new();

    println!("{}", controller.title());
    let mut on_screen = Vec::new();
    for index in 0..controller.row_count() {
        let lease = controller.render(&mut pool, index);
        print_cell(index, &lease);
        on_screen.push(lease);
    }

    // Scroll away: everything goes back to the pool...
    for lease in on_screen.drain(..) {
        pool.recycle(lease);
    }

    // ...and scrolling back serves every row from recycled instances.
    for index in 0..controller.row_count() {
        let lease = controller.render(&mut pool, index);
        pool.recycle(lease);
    }

    println!(
        "cells built: {}, recycled: {}, kinds registered: {}",
        pool.built_count(),
        pool.recycled_count(),
        pool.registration_count()
    );

    controller.select(2);
}
