//! libris - demo binary.
//!
//! A scripted walkthrough of the catalog API. All rendering lives here;
//! the library itself produces only plain data.

use libris::{BookUpdate, Catalog, LoanLedger};

fn main() {
    println!("===========================================");
    println!("  libris - library catalog core");
    println!("===========================================");
    println!();

    let mut catalog = Catalog::new();
    let mut ledger = LoanLedger::new();

    println!("Registering users and books...");
    catalog.add_user("123", "Ana").expect("valid user");
    catalog.add_user("456", "Bruno").expect("valid user");
    catalog.add_book("B2", "Solaris", "Lem", "1961").expect("valid book");
    catalog.add_book("B1", "Dune", "Herbert", "1965").expect("valid book");
    catalog.add_book("B3", "Ubik", "Dick", "1969").expect("valid book");

    if let Err(err) = catalog.add_book("B1", "Dune", "Herbert", "1965") {
        println!("  rejected duplicate: {err}");
    }

    println!();
    println!("Catalog (code order):");
    let listing = catalog.list_books();
    for book in &listing.books {
        let book = book.borrow();
        let state = if book.available { "available" } else { "on loan" };
        println!(
            "  {} | {} | {} | {} | {}",
            book.code, book.title, book.author, book.year, state
        );
    }
    println!(
        "  total: {}, available: {}, loaned: {}",
        listing.total, listing.available, listing.loaned
    );

    println!();
    println!("Requesting loans...");
    ledger.request_loan(&catalog, "123", "B1").expect("loanable");
    ledger.request_loan(&catalog, "456", "B2").expect("loanable");
    if let Err(err) = ledger.request_loan(&catalog, "456", "B1") {
        println!("  rejected: {err}");
    }

    println!("Active loans (oldest first):");
    for loan in ledger.list_loans() {
        println!(
            "  {} -> {}",
            loan.user.borrow().name,
            loan.book.borrow().title
        );
    }

    println!();
    println!("Editing B3 title...");
    catalog
        .edit_book("B3", BookUpdate::none().title("Ubik (reissue)"))
        .expect("book exists");

    println!("Returning the oldest loan...");
    let returned = ledger.return_loan().expect("loan pending");
    println!(
        "  returned '{}' by {}",
        returned.book.borrow().title,
        returned.user.borrow().name
    );

    println!();
    println!("State root: {}", hex::encode(catalog.state_root()));
    println!(
        "Books: {} | Users: {} | Active loans: {}",
        catalog.book_count(),
        catalog.user_count(),
        ledger.len()
    );
}
