mod add_file_stores_content_by_digest;
