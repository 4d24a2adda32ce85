pub mod d400_dealer_overview;
