mod header_tests;
