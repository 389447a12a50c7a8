mod resolve_tests;
